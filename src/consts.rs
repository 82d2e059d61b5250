pub mod cli_consts {
    //! Admin Dashboard Constants
    //!
    //! Branding, timing and layout values shared by the shell, the dashboard
    //! and the headless commands.

    // =============================================================================
    // BRANDING
    // =============================================================================

    /// Product name shown in the sidebar header and the splash screen.
    pub const APP_NAME: &str = "Solicite IA";

    /// Sidebar header subtitle.
    pub const APP_SUBTITLE: &str = "Admin Panel";

    /// Subtitle under the active page title in the top bar.
    pub const TOPBAR_SUBTITLE: &str = "Gerencie sua plataforma Solicite IA";

    /// Signed-in administrator shown in the sidebar profile block.
    pub const ADMIN_NAME: &str = "Administrador";
    pub const ADMIN_EMAIL: &str = "admin@solicite.ao";
    pub const ADMIN_INITIALS: &str = "AD";

    // =============================================================================
    // SHELL STATE
    // =============================================================================

    /// Notification badge value seeded when the shell mounts. Nothing updates it yet.
    pub const NOTIFICATION_SEED: u32 = 3;

    /// Maximum number of entries kept in the router back history.
    pub const MAX_ROUTE_HISTORY: usize = 32;

    // =============================================================================
    // TIMING
    // =============================================================================

    /// How long the splash screen stays up before the shell mounts.
    pub const SPLASH_DURATION_MS: u64 = 2_000;

    /// Input poll interval of the UI loop; one tick per poll.
    pub const TICK_RATE_MS: u64 = 100;

    /// Default simulated latency of the mock dashboard source.
    pub const DEFAULT_FETCH_DELAY_MS: u64 = 600;

    // =============================================================================
    // LAYOUT
    // =============================================================================

    pub mod layout {
        /// Sidebar width in columns when open.
        pub const SIDEBAR_WIDTH: u16 = 30;

        /// Rows taken by the brand block at the top of the sidebar.
        pub const SIDEBAR_HEADER_HEIGHT: u16 = 4;

        /// Rows taken by the profile block at the bottom of the sidebar.
        pub const SIDEBAR_PROFILE_HEIGHT: u16 = 4;

        /// Rows taken by the top bar.
        pub const TOPBAR_HEIGHT: u16 = 4;

        /// Rows taken by the key hint footer.
        pub const FOOTER_HEIGHT: u16 = 2;
    }
}
