pub const PAGE_STYLES: &str = r#"
/* Header */
.site-header {
  position: relative;
  z-index: 50;
  background-color: var(--background);
  border-bottom: 1px solid var(--border);
  padding-top: env(safe-area-inset-top, 0px);
}

.brand-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: var(--space-4);
}

.brand {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  cursor: pointer;
}

.brand-flame {
  font-size: 1.5rem;
  animation: pulse 2s ease-in-out infinite;
}

.brand h1 {
  font-size: 1.25rem;
  font-weight: 900;
  line-height: 1;
  color: var(--text-primary);
}

.brand-locality {
  display: block;
  margin-top: var(--space-1);
  font-size: 10px;
  font-weight: 900;
  letter-spacing: 0.2em;
  color: var(--primary);
}

.header-actions {
  display: flex;
  gap: var(--space-3);
}

.call-anchor {
  position: relative;
  flex: 1;
}

/* Category strip */
.strip-nav {
  position: sticky;
  top: 0;
  z-index: 40;
  padding: var(--space-4) 0;
  background-color: var(--background-translucent);
  backdrop-filter: blur(24px);
  border-bottom: 1px solid var(--border);
  box-shadow: var(--shadow-strip);
}

.strip-frame {
  position: relative;
  max-width: var(--content-width);
  margin: 0 auto;
  padding: 0 var(--space-10);
}

.strip {
  display: flex;
  gap: var(--space-3);
  overflow-x: auto;
  padding: var(--space-1) var(--space-2);
  scrollbar-width: none;
}

.strip::-webkit-scrollbar {
  display: none;
}

.strip-tab {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  white-space: nowrap;
  padding: 0.625rem var(--space-5);
  border-radius: var(--radius-lg);
  font-size: 13px;
  font-weight: 900;
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-tertiary);
  transition: all var(--transition-slow) var(--easing-standard);
}

.strip-tab:hover {
  text-decoration: none;
  border-color: var(--primary-glow);
}

.strip-tab.active {
  background-color: var(--primary);
  border-color: var(--primary-light);
  color: white;
  box-shadow: 0 10px 15px -3px var(--primary-glow);
  transform: scale(1.05);
}

.strip-tab-icon {
  font-size: 1.125rem;
}

.strip-step {
  position: absolute;
  top: 50%;
  z-index: 20;
  width: 2rem;
  height: 2rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  background-color: var(--surface);
  border: 1px solid var(--border);
  color: var(--primary);
  font-weight: 700;
  cursor: pointer;
  transform: translateY(-50%);
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.strip-step.start {
  inset-inline-start: var(--space-1);
}

.strip-step.end {
  inset-inline-end: var(--space-1);
}

.strip-step.hidden {
  opacity: 0;
  pointer-events: none;
}

.strip-fade {
  position: absolute;
  top: 0;
  bottom: 0;
  width: 2rem;
  z-index: 10;
  pointer-events: none;
}

.strip-fade.start {
  inset-inline-start: var(--space-10);
  background: linear-gradient(to left, var(--background), transparent);
}

.strip-fade.end {
  inset-inline-end: var(--space-10);
  background: linear-gradient(to right, var(--background), transparent);
}

/* Main column */
.page-main {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: var(--space-8) var(--space-5) 12rem;
}

.hero-card {
  position: relative;
  overflow: hidden;
  margin-bottom: var(--space-12);
}

.open-now {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  margin-bottom: var(--space-3);
  font-size: 10px;
  font-weight: 900;
  color: var(--success);
}

.open-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: var(--radius-full);
  background-color: var(--success);
  animation: pulse 2s ease-in-out infinite;
}

.hero-card h2 {
  font-size: 1.875rem;
  font-weight: 900;
  color: var(--text-primary);
  margin-bottom: var(--space-2);
}

.hero-card p {
  max-width: 200px;
  font-size: 0.75rem;
  color: var(--text-tertiary);
}

.hero-flame {
  position: absolute;
  left: -1.5rem;
  bottom: -1.5rem;
  font-size: 140px;
  opacity: 0.1;
  filter: grayscale(1);
  pointer-events: none;
  user-select: none;
}

/* Menu sections */
.menu-section {
  margin-bottom: var(--space-10);
  scroll-margin-top: 100px;
}

.section-banner {
  position: relative;
  aspect-ratio: 16 / 10;
  border-radius: var(--radius-2xl);
  overflow: hidden;
  margin-bottom: var(--space-5);
  border: 1px solid var(--border);
  background-color: var(--surface-raised);
  box-shadow: var(--shadow-lg);
}

.section-banner img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.banner-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, var(--banner-fade), transparent 60%);
  opacity: 0.9;
}

.banner-caption {
  position: absolute;
  bottom: var(--space-6);
  inset-inline-start: var(--space-6);
}

.banner-kicker {
  font-size: 10px;
  font-weight: 900;
  color: var(--primary);
  opacity: 0.8;
}

.banner-title {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 1.5rem;
}

.banner-title h2 {
  font-size: 1.875rem;
  font-weight: 900;
  line-height: 1;
  color: var(--text-primary);
}

.section-items {
  background-color: var(--surface-muted);
  backdrop-filter: blur(12px);
  border: 1px solid var(--border);
  border-radius: var(--radius-2xl);
  padding: var(--space-5);
}

.tier-headers {
  display: flex;
  justify-content: flex-end;
  gap: var(--space-10);
  padding-bottom: var(--space-3);
  margin-bottom: var(--space-6);
  border-bottom: 1px solid var(--border-subtle);
  font-size: 10px;
  font-weight: 900;
  color: var(--text-muted);
}

.item-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-3);
  padding: var(--space-5) var(--space-3);
  margin: 0 calc(-1 * var(--space-3));
  border-radius: var(--radius-lg);
  border-bottom: 1px solid var(--border-subtle);
  transition: background-color var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.item-row:last-child {
  border-bottom: none;
}

.item-row:hover {
  background-color: var(--surface-raised);
}

.item-row:active {
  transform: scale(0.98);
}

.item-name {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: var(--space-2);
  max-width: 50%;
}

.item-title {
  font-weight: 700;
  color: var(--text-secondary);
}

.item-row:hover .item-title {
  color: var(--primary-light);
}

.item-flags {
  display: flex;
  align-items: center;
  gap: 0.375rem;
}

.item-prices {
  display: flex;
  align-items: flex-end;
  gap: var(--space-3);
  flex-shrink: 0;
}

.tier {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-1);
}

.tier-label {
  font-size: 9px;
  font-weight: 900;
  color: var(--text-muted);
}

.tier-price {
  padding: var(--space-2) 0.875rem;
  border-radius: var(--radius-md);
  background-color: var(--surface-raised);
  border: 1px solid var(--border-subtle);
}

.price-value {
  font-size: 1.125rem;
  font-weight: 900;
  line-height: 1;
  color: var(--primary);
}

.price-currency {
  margin-inline-start: 0.125rem;
  font-size: 9px;
  font-weight: 900;
  color: var(--text-tertiary);
}

/* Additions */
.additions-banner {
  border: 2px solid var(--primary-glow);
}

.additions-panel {
  border: 2px solid var(--primary);
  border-radius: var(--radius-3xl);
  padding: var(--space-6);
  background-color: var(--surface);
}

.addition-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-5);
  margin-bottom: var(--space-4);
  border-radius: var(--radius-lg);
  border: 2px solid var(--border);
  background-color: var(--background);
  font-weight: 900;
}

.addition-price {
  padding: 0.625rem var(--space-5);
  border-radius: var(--radius-md);
  background-color: var(--primary);
  color: white;
  font-size: 1.25rem;
  font-weight: 900;
}

.protein-card {
  margin-top: var(--space-8);
  padding: var(--space-8);
  border-radius: 2.25rem;
  background: linear-gradient(135deg, var(--primary-light), var(--primary-dark));
  color: white;
}

.protein-card h4 {
  font-size: 1.5rem;
  font-weight: 900;
  margin-bottom: var(--space-6);
}

.protein-items {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
  margin-bottom: var(--space-10);
}

.protein-chip {
  padding: 0.625rem var(--space-5);
  border-radius: var(--radius-lg);
  border: 1px solid rgba(255, 255, 255, 0.3);
  background-color: rgba(255, 255, 255, 0.2);
  font-size: 12px;
  font-weight: 900;
}

.protein-price {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: var(--space-8);
  border-top: 1px solid rgba(255, 255, 255, 0.3);
  font-weight: 900;
}

.protein-price-value {
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-xl);
  background-color: white;
  color: var(--primary);
  font-size: 2.25rem;
}

/* Footer */
.site-footer {
  margin-top: 6rem;
  padding-bottom: var(--space-12);
}

.footer-column {
  max-width: 28rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-8);
}

.qr-card {
  width: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-6);
  text-align: center;
}

.qr-card h3 {
  font-size: 1.25rem;
  font-weight: 900;
  color: var(--text-primary);
}

.qr-card p {
  font-size: 0.75rem;
  font-weight: 700;
  color: var(--text-tertiary);
}

.qr-frame {
  position: relative;
  padding: var(--space-4);
  border-radius: var(--radius-xl);
  background-color: white;
  border: 8px solid var(--surface-raised);
}

.qr-frame img {
  display: block;
  width: 12rem;
  height: 12rem;
}

.qr-badge {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  pointer-events: none;
}

.qr-badge span {
  width: 2.5rem;
  height: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-md);
  border: 2px solid var(--primary);
  background-color: white;
  font-size: 1.25rem;
}

.qr-print {
  font-size: 0.875rem;
  font-weight: 900;
}

.info-card {
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.info-row {
  display: flex;
  align-items: flex-start;
  gap: var(--space-4);
}

.info-icon {
  width: 3rem;
  height: 3rem;
  flex-shrink: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  border-radius: var(--radius-lg);
  background-color: var(--surface-raised);
}

.info-kicker {
  font-size: 10px;
  font-weight: 900;
  color: var(--primary);
}

.info-text {
  font-size: 13px;
  font-weight: 700;
  color: var(--text-secondary);
}

.info-hotline {
  font-size: 1.25rem;
  font-weight: 900;
  color: var(--text-primary);
}

.info-divider {
  height: 1px;
  background-color: var(--border-subtle);
}

.credit {
  text-align: center;
  font-size: 11px;
  font-weight: 700;
  color: var(--text-muted);
}

/* Floating action bar */
.action-bar {
  position: fixed;
  left: 0;
  right: 0;
  bottom: 0;
  z-index: 60;
  padding: var(--space-2) var(--space-4) calc(var(--safe-bottom) + 1.25rem);
}

.action-bar-inner {
  position: relative;
  max-width: 36rem;
  margin: 0 auto;
  display: flex;
  align-items: center;
  justify-content: space-around;
  padding: var(--space-2);
  border-radius: var(--radius-3xl);
  border: 1px solid var(--border);
  background-color: var(--background-translucent);
  backdrop-filter: blur(24px);
  box-shadow: var(--shadow-lg);
}

.action {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-1);
  padding: var(--space-2) 0;
  background: none;
  border: none;
  cursor: pointer;
  color: var(--text-tertiary);
}

.action:hover {
  text-decoration: none;
}

.action.open {
  color: var(--primary-light);
}

.action-icon {
  font-size: 1.5rem;
}

.action-label {
  font-size: 10px;
  font-weight: 900;
}

.action-top {
  width: 3.5rem;
  height: 3.5rem;
  margin-top: -2rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  border: 4px solid var(--background);
  background-color: var(--primary);
  color: white;
  font-size: 1.25rem;
  cursor: pointer;
  z-index: 10;
}

@media (min-width: 768px) {
  .action-bar {
    display: none;
  }

  .section-banner {
    aspect-ratio: 21 / 9;
  }

  .section-items {
    padding: var(--space-8);
  }
}
"#;
