pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  flex: 1;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: 0.875rem var(--space-4);
  border-radius: var(--radius-lg);
  font-weight: 900;
  font-size: 14px;
  cursor: pointer;
  border: 1px solid transparent;
  transition: transform var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.btn:active {
  transform: scale(0.96);
}

.btn-call {
  width: 100%;
  background-color: var(--text-primary);
  color: var(--background);
}

.btn-whatsapp {
  background-color: var(--primary);
  color: white;
  box-shadow: 0 10px 20px -8px var(--primary-glow);
}

.btn-whatsapp:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.icon-button {
  width: 2.75rem;
  height: 2.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.25rem;
  border-radius: var(--radius-lg);
  background-color: var(--surface-raised);
  border: 1px solid var(--border);
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.icon-button:active {
  transform: scale(0.9);
}

/* Cards */
.card {
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-3xl);
  padding: var(--space-8);
  box-shadow: var(--shadow-lg);
}

/* Popover list of phone numbers */
.call-backdrop {
  position: fixed;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.3);
  backdrop-filter: blur(2px);
}

.call-menu {
  position: absolute;
  left: 0;
  right: 0;
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
  overflow: hidden;
  animation: slide-up var(--transition-normal) var(--easing-standard);
  z-index: 60;
}

.call-menu.below {
  top: calc(100% + var(--space-3));
}

.call-menu.above {
  bottom: calc(100% + var(--space-4));
  left: var(--space-4);
  right: var(--space-4);
}

.call-option {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-5) var(--space-6);
  border-bottom: 1px solid var(--border-subtle);
}

.call-option:last-child {
  border-bottom: none;
}

.call-option:hover {
  background-color: var(--surface-raised);
  text-decoration: none;
}

.call-label {
  font-size: 13px;
  font-weight: 700;
  color: var(--text-tertiary);
}

.call-number {
  font-size: 1.125rem;
  font-weight: 900;
  color: var(--text-primary);
  font-variant-numeric: tabular-nums;
}

/* Badges */
.badge-popular {
  background-color: var(--primary);
  color: white;
  font-size: 8px;
  font-weight: 900;
  padding: 0.125rem 0.375rem;
  border-radius: 0.375rem;
  animation: popular 2s ease-in-out infinite;
}

.badge-spicy {
  font-size: 0.875rem;
  line-height: 1;
  animation: spicy 1.5s ease-in-out infinite;
}

@keyframes slide-up {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes popular {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.75; }
}

@keyframes spicy {
  0%, 100% { transform: rotate(0deg); }
  25% { transform: rotate(-8deg); }
  75% { transform: rotate(8deg); }
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}
"#;
