//! Styling for the `Fast Pizza` storefront.
//!
//! The storefront is styled with Tailwind utility classes; this module keeps
//! the class lists used by the shell components in one place.

/// Classes for the top bar.
pub mod header {
    /// Outer bar: flex row, bottom border, yellow background, uppercase
    /// letter-spaced text, wider horizontal padding from the `sm` breakpoint.
    pub const CONTAINER: &str = "flex items-center justify-between border-b border-stone-500 bg-yellow-400 px-4 py-3 uppercase tracking-widest sm:px-6";
    /// Home link wrapping logo and label.
    pub const BRAND_LINK: &str = "flex items-center gap-2";
    /// Brand label text.
    pub const BRAND_LABEL: &str = "font-semibold";
    /// Optional logo image.
    pub const LOGO: &str = "max-h-10 w-auto";
}

/// Classes for the order search box.
pub mod search_order {
    /// Search input; widens on focus.
    pub const INPUT: &str = "w-28 rounded-full bg-yellow-100 px-4 py-2 text-sm transition-all duration-300 placeholder:text-stone-400 focus:outline-none focus:ring focus:ring-yellow-500 focus:ring-opacity-50 sm:w-64 sm:focus:w-72";
}

/// Classes for the user name label.
pub mod user_name {
    /// Hidden on small screens.
    pub const LABEL: &str = "hidden text-sm font-semibold md:block";
}

/// Classes for the application shell.
pub mod layout {
    /// Header, content and footer rows.
    pub const SHELL: &str = "grid h-screen grid-rows-[auto_1fr_auto]";
    /// Scrollable content area.
    pub const MAIN: &str = "overflow-scroll";
    /// Centered page column.
    pub const PAGE: &str = "mx-auto max-w-3xl px-4 py-6";
    /// Page heading.
    pub const PAGE_TITLE: &str = "text-xl font-semibold";
}
