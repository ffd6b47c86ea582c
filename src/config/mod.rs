use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub images_dir: String,
    #[serde(default = "default_popular_limit")]
    pub popular_limit: usize,
}

fn default_popular_limit() -> usize {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            images_dir: Self::default_images_dir().to_string_lossy().to_string(),
            popular_limit: default_popular_limit(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("eventscout")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".eventscout")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eventscout.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("eventscout.sqlite")
    }

    /// Default directory for event thumbnail files
    pub fn default_images_dir() -> PathBuf {
        Self::config_dir().join("images")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("Failed to read configuration file");
            serde_yaml::from_str(&content).expect("Failed to parse configuration file")
        } else {
            Self::default()
        }
    }

    /// Apply a `--db` override from the command line. Thumbnails follow the
    /// database file so an overridden store stays self-contained.
    pub fn apply_db_override(&mut self, db: Option<&str>) {
        if let Some(db) = db {
            let db = crate::utils::path::expand_tilde(db);
            self.database = db.to_string_lossy().to_string();
            self.images_dir = format!("{}.images", self.database);
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        // Write config file
        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                images_dir: Self::default_images_dir().to_string_lossy().to_string(),
                popular_limit: default_popular_limit(),
            };
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
