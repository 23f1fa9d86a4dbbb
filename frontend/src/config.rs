/// Pixels the page has to scroll before the navigation bar turns solid.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Milliseconds between two characters of the hero typewriter.
pub const TYPEWRITER_INTERVAL_MS: u32 = 100;

/// Share of a section that must be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn contact_endpoint() -> Option<&'static str> {
    None  // Submissions stay in the console while developing
}

/// Relay that receives contact form posts, set with `PORTFOLIO_CONTACT_ENDPOINT` at build time.
#[cfg(not(debug_assertions))]
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("PORTFOLIO_CONTACT_ENDPOINT").filter(|url| !url.is_empty())
}
