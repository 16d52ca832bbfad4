// Built-in defaults for the navigation bar

/// Bottom row labels, in display order
pub const DEFAULT_NAV_ITEMS: &[&str] = &[
    "Projects",
    "Integrations",
    "Deployments",
    "Activity",
    "Domains",
    "Usage",
    "Observability",
    "Storage",
    "Flags",
    "AI Gateway",
    "Agent",
    "Support",
    "Settings",
];

/// Indicator spring
pub const SPRING_STIFFNESS: f64 = 380.0;
pub const SPRING_DAMPING: f64 = 30.0;
pub const SPRING_MASS: f64 = 1.0;

/// Progress at which the header is fully collapsed
pub const COLLAPSE_PROGRESS_END: f64 = 0.1;

/// Header height (px) expanded / collapsed
pub const EXPANDED_HEIGHT: f64 = 88.0;
pub const COLLAPSED_HEIGHT: f64 = 45.0;

/// Offsets (px) reached at full collapse
pub const TOP_OFFSET_Y: f64 = -45.0;
pub const BOTTOM_OFFSET_Y: f64 = -45.0;
pub const BOTTOM_OFFSET_X: f64 = 65.0;

/// Frame interval used by the animation loop (~60fps)
pub const FRAME_INTERVAL_MS: u32 = 16;

/// Header identity shown in the top row
pub const TEAM_NAME: &str = "daniel's projects";
pub const PLAN_BADGE: &str = "Hobby";
pub const AVATAR_URL: &str = "https://avatar.vercel.sh/daniel";
pub const AVATAR_FALLBACK: &str = "D";
