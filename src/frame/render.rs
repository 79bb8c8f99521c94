use super::*;
use crate::FRAME_HEIGHT;
use crate::FRAME_WIDTH;
use crate::game::*;

const TITLE: &str = "Rock Paper Scissors Game";
const BLURB: &str = "Play Rock Paper Scissors and earn coins!";

/// One `fc:frame` button: a label and the action it posts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: &'static str,
    action: &'static str,
    choice: Option<Choice>,
}

impl Button {
    const fn post(label: &'static str, action: &'static str) -> Self {
        Self {
            label,
            action,
            choice: None,
        }
    }
    const fn throw(label: &'static str, choice: Choice) -> Self {
        Self {
            label,
            action: "play",
            choice: Some(choice),
        }
    }

    /// The buttons rendered under each phase's card.
    pub fn row(phase: Phase) -> Vec<Self> {
        match phase {
            Phase::Start => vec![
                Self::throw("🗿 Rock", Choice::Rock),
                Self::throw("📄 Paper", Choice::Paper),
                Self::throw("✂️ Scissors", Choice::Scissors),
                Self::post("💰 Balance", "balance"),
            ],
            Phase::Result => vec![
                Self::post("🔄 Play Again", "restart"),
                Self::post("💰 Balance", "balance"),
                Self::post("🏆 Stats", "stats"),
            ],
            Phase::Balance => vec![
                Self::post("🎮 Play Game", "restart"),
                Self::post("🎁 Daily Reward", "reward"),
            ],
            Phase::Stats => vec![
                Self::post("🎮 Play Game", "restart"),
                Self::post("💰 Balance", "balance"),
            ],
        }
    }

    pub fn label(&self) -> &str {
        self.label
    }

    /// Absolute URL this button posts to.
    pub fn target(&self, base: &str, id: &SessionId) -> String {
        match self.choice {
            Some(choice) => format!(
                "{}/api/frame/{}?choice={}&session={}",
                base, self.action, choice, id
            ),
            None => format!("{}/api/frame/{}?session={}", base, self.action, id),
        }
    }
}

/// Escapes text for HTML attributes and SVG text nodes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Frame HTML: image reference plus the phase's buttons.
pub fn html(session: &Session, id: &SessionId, base: &str) -> String {
    let image = escape(&format!("{}/api/frame/image?session={}", base, id));
    let buttons = Button::row(session.phase())
        .iter()
        .enumerate()
        .map(|(i, button)| {
            let n = i + 1;
            format!(
                r#"    <meta name="fc:frame:button:{n}" content="{}" />
    <meta name="fc:frame:button:{n}:action" content="post" />
    <meta name="fc:frame:button:{n}:target" content="{}" />
"#,
                escape(button.label()),
                escape(&button.target(base, id)),
            )
        })
        .collect::<String>();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{TITLE}</title>
    <meta name="fc:frame" content="vNext" />
    <meta name="fc:frame:image" content="{image}" />
    <meta name="fc:frame:image:aspect_ratio" content="1.91:1" />
{buttons}    <meta property="og:title" content="{TITLE}" />
    <meta property="og:description" content="{BLURB}" />
    <meta property="og:image" content="{image}" />
    <meta name="twitter:card" content="summary_large_image" />
    <meta name="twitter:title" content="{TITLE}" />
    <meta name="twitter:description" content="{BLURB}" />
</head>
<body>
    <h1>{TITLE}</h1>
    <p>This is a Farcaster Frame game. View in a Frame-enabled client to play!</p>
</body>
</html>
"#
    )
}

/// The card image for the session's current phase.
pub fn svg(session: &Session) -> String {
    let content = match session.phase() {
        Phase::Start => start(),
        Phase::Result => match session.state().round() {
            Some(round) => result(round, session.state().balance()),
            None => start(),
        },
        Phase::Balance => balance(session),
        Phase::Stats => stats(session.state()),
    };
    format!(
        r##"<svg width="{FRAME_WIDTH}" height="{FRAME_HEIGHT}" xmlns="http://www.w3.org/2000/svg">
    <defs>
        <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
            <stop offset="0%" stop-color="#1a1a2e"/>
            <stop offset="50%" stop-color="#16213e"/>
            <stop offset="100%" stop-color="#0f3460"/>
        </linearGradient>
    </defs>
    <rect width="100%" height="100%" fill="url(#bg)"/>
{content}</svg>
"##
    )
}

fn text(x: u32, y: u32, size: u32, fill: &str, bold: bool, body: &str) -> String {
    format!(
        "    <text x=\"{}\" y=\"{}\" font-family=\"Arial\" font-size=\"{}\"{} text-anchor=\"middle\" fill=\"{}\">{}</text>\n",
        x,
        y,
        size,
        if bold { " font-weight=\"bold\"" } else { "" },
        fill,
        escape(body)
    )
}

fn start() -> String {
    let mut out = text(400, 80, 48, "white", true, "Rock Paper Scissors");
    out += &text(400, 180, 32, "#4299e1", false, "Choose your move!");
    for (choice, x) in Choice::all().into_iter().zip([150, 340, 530]) {
        out += &format!(
            "    <rect x=\"{}\" y=\"220\" width=\"120\" height=\"80\" rx=\"10\" fill=\"#2d3748\"/>\n",
            x
        );
        out += &text(x + 60, 275, 40, "white", false, choice.emoji());
    }
    out
}

fn result(round: &Round, balance: u64) -> String {
    let (headline, color) = match round.outcome() {
        Outcome::Win => (format!("🎉 You Win! +{} coins", round.reward()), "#48bb78"),
        Outcome::Lose => (format!("😢 You Lose! +{} coins", round.reward()), "#f56565"),
        Outcome::Draw => (format!("🤝 It's a Tie! +{} coins", round.reward()), "#ed8936"),
    };
    let mut out = text(400, 80, 48, "white", true, "Rock Paper Scissors");
    out += &text(200, 180, 24, "white", false, "You");
    out += &text(200, 240, 60, "white", false, round.player().emoji());
    out += &text(400, 220, 36, "#4299e1", true, "VS");
    out += &text(600, 180, 24, "white", false, "Computer");
    out += &text(600, 240, 60, "white", false, round.computer().emoji());
    out += &text(400, 320, 32, color, true, &headline);
    out += &text(400, 360, 20, "white", false, &format!("Balance: {} coins", balance));
    out
}

fn balance(session: &Session) -> String {
    let state = session.state();
    let mut out = text(400, 80, 48, "white", true, "Your Balance");
    out += &text(400, 180, 64, "#4299e1", true, &state.balance().to_string());
    out += &text(400, 220, 32, "white", false, "coins");
    if let Some(notice) = session.notice() {
        out += &text(400, 280, 24, "#48bb78", false, notice);
    }
    out += &text(
        400,
        350,
        20,
        "#666",
        false,
        &format!("Games: {}", state.stats().games_played()),
    );
    out
}

fn stats(state: &GameState) -> String {
    let stats = state.stats();
    let mut out = text(400, 80, 36, "white", true, "Your Game Stats");
    let lines = [
        format!("Balance: {} coins", state.balance()),
        format!("Wins: {}", stats.wins()),
        format!("Losses: {}", stats.losses()),
        format!("Ties: {}", stats.draws()),
        format!("Total Games: {}", stats.games_played()),
        format!("Win Rate: {}%  Best Streak: {}", stats.win_rate(), stats.best_streak()),
    ];
    for (line, y) in lines.iter().zip((150..).step_by(40)) {
        out += &text(400, y, 28, "white", false, line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_card_offers_three_throws_and_balance() {
        let id = SessionId::from("42");
        let html = html(&Session::default(), &id, "https://rps.example");
        assert!(html.contains(r#"<meta name="fc:frame" content="vNext" />"#));
        assert!(html.contains(
            r#"content="https://rps.example/api/frame/play?choice=rock&amp;session=42""#
        ));
        assert!(html.contains(r#"content="https://rps.example/api/frame/image?session=42""#));
        assert!(html.contains("fc:frame:button:4:target"));
        assert!(!html.contains("fc:frame:button:5"));
    }
    #[test]
    fn rows_per_phase() {
        let labels = |phase| {
            Button::row(phase)
                .iter()
                .map(|b| b.label().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(labels(Phase::Result), ["🔄 Play Again", "💰 Balance", "🏆 Stats"]);
        assert_eq!(labels(Phase::Balance), ["🎮 Play Game", "🎁 Daily Reward"]);
        assert_eq!(labels(Phase::Stats), ["🎮 Play Game", "💰 Balance"]);
    }
    #[test]
    fn hostile_session_id_is_escaped() {
        let id = SessionId::from("\"><script>");
        let html = html(&Session::default(), &id, "http://localhost:5000");
        assert!(!html.contains("<script>"));
    }
    #[test]
    fn result_card_shows_the_round() {
        let rules = Rules::default();
        let mut session = Session::opening(&rules);
        session.play(Choice::Rock, Choice::Scissors, &rules);
        let svg = svg(&session);
        assert!(svg.contains("You Win! +10 coins"));
        assert!(svg.contains("Balance: 10 coins"));
        assert!(svg.starts_with(r#"<svg width="800" height="418""#));
    }
    #[test]
    fn balance_card_shows_notice() {
        let rules = Rules::default();
        let mut session = Session::opening(&rules);
        session.reward(chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(), &rules);
        assert!(svg(&session).contains("+50 coins claimed!"));
    }
    #[test]
    fn stats_card_counts_games() {
        let rules = Rules::default();
        let mut session = Session::opening(&rules);
        session.play(Choice::Rock, Choice::Paper, &rules);
        session.play(Choice::Rock, Choice::Rock, &rules);
        session.stats();
        let svg = svg(&session);
        assert!(svg.contains("Total Games: 2"));
        assert!(svg.contains("Ties: 1"));
    }
}
