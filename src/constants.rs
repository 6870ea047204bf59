// DOM contract shared between the page markup and the web frontend.

// Ambient channels, published as custom properties on <html>
pub const VAR_MOUSE_X: &str = "--mouse-x";
pub const VAR_MOUSE_Y: &str = "--mouse-y";
pub const VAR_PARALLAX_X: &str = "--parallax-x";
pub const VAR_PARALLAX_Y: &str = "--parallax-y";
pub const VAR_NORMALIZED_X: &str = "--normalized-x";
pub const VAR_NORMALIZED_Y: &str = "--normalized-y";
pub const VAR_REACTOR_INTENSITY: &str = "--reactor-intensity";

// Intro overlay
pub const INTRO_ROOT_ID: &str = "reactor-ignition";
pub const INTRO_HEADLINE_ID: &str = "reactor-headline";
pub const INTRO_SUBTEXT_ID: &str = "reactor-subtext";
pub const INTRO_IGNITE_ID: &str = "reactor-ignite";
pub const INTRO_SKIP_ID: &str = "reactor-skip";
pub const INTRO_PROGRESS_ID: &str = "reactor-progress";
pub const INTRO_PROGRESS_DOT_SELECTOR: &str = ".reactor-progress-dot";
pub const MAIN_CONTENT_ID: &str = "app-main";

// Interactive elements
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const MAGNETIC_INTENSITY_ATTR: &str = "data-magnetic-intensity";
pub const TRAIL_DOT_SELECTOR: &str = ".cursor-trail-dot";

// Overrides read from <html>
pub const ATTR_PARALLAX_INTENSITY: &str = "data-parallax-intensity";
pub const ATTR_LOG_LEVEL: &str = "data-log-level";

// Class toggles
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_LIT: &str = "lit";
pub const CLASS_EXITING: &str = "exiting";

// Media queries
pub const QUERY_REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";
pub const QUERY_COARSE_POINTER: &str = "(pointer: coarse)";

// Card tilt, scroll-linked sections and typed headlines
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const VAR_LIGHT_X: &str = "--light-x";
pub const VAR_LIGHT_Y: &str = "--light-y";
pub const SCROLL_PARALLAX_SELECTOR: &str = "[data-scroll-parallax]";
pub const ATTR_SCROLL_OFFSET: &str = "data-parallax-offset";
pub const ATTR_SCROLL_SPEED: &str = "data-parallax-speed";
pub const TYPEWRITER_SELECTOR: &str = "[data-typewriter]";
pub const ATTR_TYPEWRITER_DELAY: &str = "data-typewriter-delay";
pub const ATTR_TYPEWRITER_SPEED: &str = "data-typewriter-speed";
pub const CLASS_TYPING: &str = "typing";
