use std::borrow::Cow;
use std::fs;
use std::path::Path;

const WELCOME: &str = include_str!("../resources/welcome.txt");
const GAME_OVER: &str = include_str!("../resources/gameover.txt");
const GAME_WON: &str = include_str!("../resources/gamewon.txt");

/// Static end-of-game and welcome screens.
#[derive(Clone, Debug, PartialEq)]
pub struct Banners {
    pub welcome: Cow<'static, str>,
    pub game_over: Cow<'static, str>,
    pub game_won: Cow<'static, str>,
}

impl Default for Banners {
    fn default() -> Self {
        Self {
            welcome: Cow::Borrowed(WELCOME),
            game_over: Cow::Borrowed(GAME_OVER),
            game_won: Cow::Borrowed(GAME_WON),
        }
    }
}

impl Banners {
    /// Reads `welcome.txt`, `gameover.txt` and `gamewon.txt` from `dir`,
    /// keeping the built-in screen for any file that cannot be read.
    pub fn load(dir: &Path) -> Self {
        let read = |name: &str, fallback: &'static str| {
            let path = dir.join(name);
            match fs::read_to_string(&path) {
                Ok(text) => Cow::Owned(text),
                Err(err) => {
                    log::warn!("{}: {}, using built-in banner", path.display(), err);
                    Cow::Borrowed(fallback)
                }
            }
        };

        Self {
            welcome: read("welcome.txt", WELCOME),
            game_over: read("gameover.txt", GAME_OVER),
            game_won: read("gamewon.txt", GAME_WON),
        }
    }

    /// Win screen with the score appended to its last line.
    pub fn game_won_with_score(&self, score: f64) -> String {
        format!("{} {:.2}", self.game_won.trim_end(), score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_goes_on_last_line_with_two_decimals() {
        let banners = Banners {
            game_won: Cow::Borrowed("YOU WON\nSCORE:\n\n"),
            ..Banners::default()
        };

        assert_eq!(banners.game_won_with_score(83.33333), "YOU WON\nSCORE: 83.33");
    }

    #[test]
    fn missing_directory_falls_back_to_builtin() {
        let banners = Banners::load(Path::new("/nonexistent/minesweeper/resources"));
        assert_eq!(banners, Banners::default());
    }

    #[test]
    fn files_in_directory_override_builtin() {
        let dir = std::env::temp_dir().join(format!("minesweeper-banners-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("welcome.txt"), "hello\n").unwrap();

        let banners = Banners::load(&dir);

        assert_eq!(banners.welcome, "hello\n");
        assert_eq!(banners.game_over, GAME_OVER);
    }
}
