//! HUD strings per locale.

use crate::types::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub score: &'static str,
    pub start_game: &'static str,
    pub game_over: &'static str,
    pub play_again: &'static str,
    pub paused: &'static str,
    pub resume: &'static str,
    pub controls: &'static str,
    pub move_piece: &'static str,
    pub soft_drop: &'static str,
    pub hard_drop: &'static str,
    pub pause: &'static str,
    pub restart: &'static str,
    pub quit: &'static str,
}

const EN: Labels = Labels {
    title: "MINI TETRIS",
    score: "Score",
    start_game: "Enter: Start Game",
    game_over: "GAME OVER",
    play_again: "R: Play Again",
    paused: "PAUSED",
    resume: "P: Resume",
    controls: "Controls",
    move_piece: "Move",
    soft_drop: "Soft Drop",
    hard_drop: "Hard Drop",
    pause: "Pause",
    restart: "Restart",
    quit: "Quit",
};

const AR: Labels = Labels {
    title: "تتريس مصغرة",
    score: "النتيجة",
    start_game: "Enter: ابدأ اللعبة",
    game_over: "انتهت اللعبة",
    play_again: "R: العب مرة أخرى",
    paused: "متوقفة مؤقتا",
    resume: "P: استئناف",
    controls: "التحكم",
    move_piece: "تحريك",
    soft_drop: "إسقاط بطيء",
    hard_drop: "إسقاط سريع",
    pause: "إيقاف مؤقت",
    restart: "إعادة",
    quit: "خروج",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::En => &EN,
            Locale::Ar => &AR,
        }
    }
}
