//! Main application state and logic

use crate::chart::WinRateChart;
use crate::moves_view::moves_strip;
use crate::styles::{self, BODY_SIZE, CHART_HEIGHT, HEADER_SIZE, MOVE_BUTTON_WIDTH};

use iced::widget::{button, canvas, checkbox, column, container, horizontal_rule, row, text};
use iced::{Alignment, Element, Length, Task, Theme};
use rps_core::Move;
use session::{
    create_opponent, score_text, FixedOpponent, GameSession, LastMovesStrip, SessionConfig,
    WinRatePlot,
};
use tracing::warn;

const WELCOME: &str = "Make your first move to start learning!";

/// Main application state
pub struct RpsApp {
    /// Round log, opponent and score
    session: GameSession,
    /// Result of the last round
    display: String,
    /// Chart data, rebuilt after every change
    plot: WinRatePlot,
    strip: LastMovesStrip,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    MovePicked(Move),
    ExcludeTiesToggled(bool),
    NewSession,
}

impl RpsApp {
    pub fn new(config: SessionConfig) -> (Self, Task<Message>) {
        let opponent = create_opponent(&config.opponent).unwrap_or_else(|e| {
            warn!(error = %e, "falling back to the fixed opponent");
            Box::new(FixedOpponent::default())
        });
        let session = GameSession::new(opponent, &config);

        (
            Self {
                plot: session.win_rate_plot(),
                strip: session.last_moves(),
                session,
                display: WELCOME.to_string(),
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MovePicked(mv) => {
                let report = self.session.play_move(mv);
                self.display = report.display_text();
            }
            Message::ExcludeTiesToggled(exclude) => {
                self.session.set_exclude_ties(exclude);
            }
            Message::NewSession => {
                self.session.reset();
                self.display = WELCOME.to_string();
            }
        }
        self.refresh_charts();
        Task::none()
    }

    fn refresh_charts(&mut self) {
        self.plot = self.session.win_rate_plot();
        self.strip = self.session.last_moves();
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = text("Can you beat the AI?").size(HEADER_SIZE);
        let opponent = text(format!("Opponent: {}", self.session.opponent_name())).size(13);
        let score = text(score_text(&self.session.scores())).size(BODY_SIZE);

        let result = text(&self.display)
            .size(BODY_SIZE)
            .color(styles::RESULT_COLOR)
            .center();

        let buttons = row![
            move_button(Move::Rock),
            move_button(Move::Paper),
            move_button(Move::Scissors),
        ]
        .spacing(10);

        let controls = row![
            checkbox("Exclude ties", self.session.exclude_ties())
                .on_toggle(Message::ExcludeTiesToggled),
            button(text("New Session"))
                .on_press(Message::NewSession)
                .style(button::secondary),
        ]
        .spacing(20)
        .align_y(Alignment::Center);

        let chart = canvas(WinRateChart::new(&self.plot))
            .width(Length::Fill)
            .height(CHART_HEIGHT);

        let content = column![
            header,
            opponent,
            score,
            container(result).padding(20),
            buttons,
            controls,
            horizontal_rule(1),
            chart,
            moves_strip(&self.strip),
        ]
        .spacing(12)
        .padding(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Create a move button
fn move_button(mv: Move) -> Element<'static, Message> {
    button(text(mv.name()).center().width(Length::Fill))
        .on_press(Message::MovePicked(mv))
        .style(button::primary)
        .width(MOVE_BUTTON_WIDTH)
        .padding(12)
        .into()
}
