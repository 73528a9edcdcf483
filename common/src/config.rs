/// Presentation settings shared by every subcommand.
pub struct Config {
    /// Suppresses the startup banner.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// 0 prints everything, 1 condenses decorations, 2 keeps only the
    /// summary line.
    pub quiet: u8,
}
