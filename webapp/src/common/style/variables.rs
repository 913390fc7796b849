pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --primary: #EA580C;          /* orange-600, active tab and prices */
  --primary-light: #F97316;
  --primary-dark: #C2410C;
  --primary-glow: rgba(234, 88, 12, 0.3);
  --success: #22C55E;

  /* Spacing */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-5: 1.25rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-10: 2.5rem;
  --space-12: 3rem;

  /* Radii */
  --radius-md: 0.75rem;
  --radius-lg: 1rem;
  --radius-xl: 1.5rem;
  --radius-2xl: 2rem;
  --radius-3xl: 2.5rem;
  --radius-full: 9999px;

  /* Layout */
  --content-width: 42rem;
  --safe-bottom: env(safe-area-inset-bottom, 0px);

  /* Motion */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 500ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}

/* Dark theme (default) */
:root.dark {
  --background: #050505;
  --background-translucent: rgba(5, 5, 5, 0.95);
  --surface: #18181B;
  --surface-muted: rgba(24, 24, 27, 0.4);
  --surface-raised: #27272A;
  --border: rgba(255, 255, 255, 0.1);
  --border-subtle: rgba(255, 255, 255, 0.05);
  --text-primary: #FFFFFF;
  --text-secondary: #E4E4E7;
  --text-tertiary: #A1A1AA;
  --text-muted: #52525B;
  --shadow-strip: 0 10px 30px -10px rgba(0, 0, 0, 0.5);
  --shadow-lg: 0 20px 40px -12px rgba(0, 0, 0, 0.6);
  --banner-fade: #050505;
  color-scheme: dark;
}

/* Light theme */
:root.light {
  --background: #FAFAFA;
  --background-translucent: rgba(250, 250, 250, 0.95);
  --surface: #FFFFFF;
  --surface-muted: #FFFFFF;
  --surface-raised: #F4F4F5;
  --border: #E4E4E7;
  --border-subtle: #F4F4F5;
  --text-primary: #18181B;
  --text-secondary: #27272A;
  --text-tertiary: #71717A;
  --text-muted: #A1A1AA;
  --shadow-strip: 0 10px 30px -10px rgba(0, 0, 0, 0.1);
  --shadow-lg: 0 20px 40px -12px rgba(0, 0, 0, 0.15);
  --banner-fade: #FAFAFA;
  color-scheme: light;
}
"#;
