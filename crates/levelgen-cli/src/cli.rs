use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "make-level")]
#[command(version, about = "Scaffold a new level and register it with its skill")]
pub struct Cli {
    /// Skill the level belongs to (created if it does not exist yet)
    pub skill_name: String,

    /// Name of the new level
    pub level_name: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Print what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_positionals() {
        let cli = Cli::try_parse_from(["make-level", "rebase", "interactive"]).unwrap();
        assert_eq!(cli.skill_name, "rebase");
        assert_eq!(cli.level_name, "interactive");
        assert!(!cli.yes);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(Cli::try_parse_from(["make-level"]).is_err());
        assert!(Cli::try_parse_from(["make-level", "rebase"]).is_err());
        assert!(Cli::try_parse_from(["make-level", "a", "b", "c"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["make-level", "-y", "--dry-run", "a", "b"]).unwrap();
        assert!(cli.yes);
        assert!(cli.dry_run);
    }
}
