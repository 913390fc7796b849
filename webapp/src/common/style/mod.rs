use constcat::concat;

mod components;
mod page;
mod variables;

pub use components::BASE_COMPONENTS;
pub use page::PAGE_STYLES;
pub use variables::CSS_VARIABLES;

// everything the page needs, in cascade order
pub const MENU_STYLES: &str = concat!(
    CSS_VARIABLES,
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Tahoma, sans-serif;
  color: var(--text-secondary);
  background-color: var(--background);
  line-height: 1.5;
  -webkit-font-smoothing: antialiased;
  transition: background-color var(--transition-slow) var(--easing-standard),
              color var(--transition-slow) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

button {
  font: inherit;
}

::selection {
  background-color: var(--primary-glow);
}

.container {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: var(--space-4) var(--space-5);
}
"#,
    BASE_COMPONENTS,
    PAGE_STYLES
);
