//! Fixed names shared across the crate

/// Project-local heymark directory
pub const HEYMARK_DIR: &str = ".heymark";

/// Link config file inside [`HEYMARK_DIR`]
pub const CONFIG_FILE: &str = "config.json";

/// Repository cache directory inside [`HEYMARK_DIR`]
pub const CACHE_DIR: &str = "cache";

/// Extension of skill documents in the linked repository
pub const SKILL_FILE_EXTENSION: &str = ".md";

/// Branch used when the link config does not name one
pub const DEFAULT_BRANCH: &str = "main";

/// Token selecting every registered tool
pub const ALL_TOOLS_TOKEN: &str = ".";

/// Public repository linked by `heymark link --samples`
pub const SAMPLES_REPO_URL: &str = "https://github.com/MosslandOpenDevs/heymark.git";

/// Folder holding the sample skills inside [`SAMPLES_REPO_URL`]
pub const SAMPLES_FOLDER: &str = "samples";

/// Command that installs the latest published release
pub const LATEST_VERSION_COMMAND: &str = "cargo install heymark --force";
