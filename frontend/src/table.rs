use rsp_common::config::Labels;
use rsp_common::{Controller, Move, PlayerNum};
use std::fmt;
use tracing::debug;
use yew::prelude::*;

#[derive(Debug, Clone)]
pub enum Message {
    Choose(PlayerNum, Move),
    Retry,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Choose(player_num, mv) => write!(f, "Choose: {} {}", player_num, mv.name()),
            Message::Retry => write!(f, "Retry"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TableProps {
    pub labels: Labels,
}

// Both players share one screen. Player 2 sits across the table, so their
// half is drawn upside down.
pub struct Table {
    controller: Controller,
}

impl Component for Table {
    type Message = Message;
    type Properties = TableProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: Controller::with_labels(ctx.props().labels.clone()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        debug!("Table update: {}", msg);
        match msg {
            // Rejected moves are logged by the controller and change nothing
            Message::Choose(player_num, mv) => self.controller.choose_move(mv, player_num).is_ok(),
            Message::Retry => {
                self.controller.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section id="table" class={classes!("flex", "flex-col", "h-screen", "text-white")}>
                { view_panel(ctx, &self.controller, PlayerNum::P2) }
                { view_retry(ctx, self.controller.is_game_over()) }
                { view_panel(ctx, &self.controller, PlayerNum::P1) }
            </section>
        }
    }
}

fn view_retry(ctx: &Context<Table>, is_game_over: bool) -> Html {
    if !is_game_over {
        return html! {};
    }
    let onclick = ctx.link().callback(|_| Message::Retry);
    html! {
        <button class={classes!("retry", "text-blue-600", "text-3xl", "py-2")} {onclick}>
            {"Retry 🔄"}
        </button>
    }
}

fn view_panel(ctx: &Context<Table>, controller: &Controller, player_num: PlayerNum) -> Html {
    let panel = controller.panel(player_num);
    let mut class = classes!(
        "panel",
        get_player_num_class(player_num),
        "flex-1",
        "flex",
        "flex-col",
        "items-center",
        "justify-between",
        "pb-10"
    );
    if player_num == PlayerNum::P2 {
        class.push("rotate-180");
    }
    let revealed = panel
        .revealed_move
        .map(|mv| mv.symbol().to_string())
        .unwrap_or_default();
    html! {
        <div class={class}>
            <div class={classes!("player-name", "text-4xl", "pt-4")}>{player_num.to_string()}</div>
            <div class={classes!("revealed-move")}>{revealed}</div>
            <div class={classes!("status", "text-4xl")}>{controller.status_text(player_num)}</div>
            <div class={classes!("choices", "flex", "w-full", "justify-around")}>
                {
                    panel.allowed_moves.iter().map(|&mv| move_button(ctx, player_num, mv)).collect::<Html>()
                }
            </div>
        </div>
    }
}

fn move_button(ctx: &Context<Table>, player_num: PlayerNum, mv: Move) -> Html {
    let onclick = ctx.link().callback(move |_| Message::Choose(player_num, mv));
    html! {
        <button class={classes!("move", mv.name())} title={mv.name()} {onclick}>
            {mv.symbol()}
        </button>
    }
}

fn get_player_num_class(player_num: PlayerNum) -> &'static str {
    match player_num {
        PlayerNum::P1 => "p1",
        PlayerNum::P2 => "p2",
    }
}
