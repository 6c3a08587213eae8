use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

/// Games with a connoisseur leaderboard on VR Master League.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    Vail,
    Breachers,
    Onward,
    Pavlov,
}

impl Game {
    pub const ALL: [Game; 4] = [Game::Vail, Game::Breachers, Game::Onward, Game::Pavlov];

    pub fn as_str(self) -> &'static str {
        match self {
            Game::Vail => "vail",
            Game::Breachers => "breachers",
            Game::Onward => "onward",
            Game::Pavlov => "pavlov",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;

    /// Exact, case-sensitive match against the allow-list.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        Game::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Game::ALL.iter().map(|g| g.as_str()).collect();
                anyhow::anyhow!("Invalid game '{}'. Valid games are: {}", s, valid.join(", "))
            })
    }
}

/// VR Master League connoisseur vote checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "connoisseur-check",
    version,
    about,
    after_help = "Exit codes: 1 on usage errors (missing match ID, unknown game) and on an \
                  unreadable or corrupt cached snapshot; 0 otherwise. Remote fetch failures \
                  are logged and skipped and never change the exit code."
)]
pub struct Config {
    /// Match identifier to tally connoisseur votes for
    pub match_id: Option<String>,

    /// Game to check (vail, breachers, onward, pavlov), or the literal
    /// "fetch" to force a refetch of the default game
    pub selector: Option<String>,

    /// The literal "fetch" to force a refetch alongside an explicit game
    pub refetch: Option<String>,

    /// VR Master League API base URL
    #[arg(
        long,
        env = "VRML_API_URL",
        default_value = "https://api.vrmasterleague.com"
    )]
    pub api_url: String,

    /// Directory holding cached vote snapshots
    #[arg(long, env = "VRML_CACHE_DIR", default_value = "cached")]
    pub cache_dir: PathBuf,

    /// Per-request HTTP timeout in seconds
    #[arg(long, env = "VRML_HTTP_TIMEOUT_SECS", default_value = "10")]
    pub http_timeout_secs: u64,
}

/// Validated positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub match_id: String,
    pub game: Game,
    pub force_fetch: bool,
}

impl Config {
    /// Validate the positional arguments. Any failure here is a usage error
    /// and fatal; nothing has touched the network or filesystem yet.
    pub fn resolve(&self) -> anyhow::Result<RunArgs> {
        let match_id = match &self.match_id {
            Some(id) => id.clone(),
            None => anyhow::bail!("You must provide a match ID."),
        };

        let mut game = Game::Vail;
        let mut force_fetch = false;

        if let Some(selector) = &self.selector {
            if selector == "fetch" {
                force_fetch = true;
            } else {
                game = selector.parse()?;
            }
        }

        if self.refetch.as_deref() == Some("fetch") {
            force_fetch = true;
        }

        Ok(RunArgs {
            match_id,
            game,
            force_fetch,
        })
    }
}
