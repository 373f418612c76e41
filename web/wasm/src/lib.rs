use tienlen::{
    Card, CardId, DiscardRecord, HandCategory, Move, PlayError, Player, PlayerId, Table,
    TableError, TableOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    table: Table,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            table: Table::new(TableOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.table = Table::new(TableOptions::default(), seed as u64);
    }

    pub fn human_id(&self) -> Option<u32> {
        self.table.human_player().map(|player| player.id as u32)
    }

    pub fn select(&self, player_id: u32, card_id: u32) {
        if let (Some(player_id), Some(card_id)) = (to_player_id(player_id), to_card_id(card_id)) {
            self.table.select(player_id, card_id);
        }
    }

    pub fn evaluate_hand(&self, player_id: u32, card_ids: Vec<u32>) -> Result<String, JsValue> {
        let category = self.category_of(player_id, &card_ids).map_err(js_err)?;
        Ok(category_to_str(category).to_string())
    }

    pub fn selected_category(&self, player_id: u32) -> Option<String> {
        self.table
            .selected_category(to_player_id(player_id)?)
            .map(|category| category_to_str(category).to_string())
    }

    pub fn find_starting_player(&self) -> Result<u32, JsValue> {
        self.table
            .find_starting_player()
            .map(|player| player.id as u32)
            .map_err(js_err)
    }

    pub fn activate_player(&self, player_id: u32) -> Result<JsValue, JsValue> {
        let chosen = self.activate(player_id).map_err(js_err)?;
        to_js_value(&chosen.map(JsMove::from))
    }

    pub fn play_selected(&self, player_id: u32) -> Result<JsValue, JsValue> {
        let record = self.play_selection(player_id).map_err(js_err)?;
        to_js_value(&JsDiscard::from(record))
    }

    pub fn play(&self, player_id: u32, card_ids: Vec<u32>) -> Result<JsValue, JsValue> {
        let record = self.play_ids(player_id, &card_ids).map_err(js_err)?;
        to_js_value(&JsDiscard::from(record))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            players: self.table.players().iter().map(JsPlayer::from).collect(),
            discards: self
                .table
                .discards()
                .into_iter()
                .map(JsDiscard::from)
                .collect(),
            cards_remaining: self.table.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

impl WasmTable {
    /// Classifies cards a player holds. A card id the player does not hold
    /// makes the whole set `Invalid`.
    fn category_of(&self, player_id: u32, card_ids: &[u32]) -> Result<HandCategory, PlayError> {
        let player = to_player_id(player_id)
            .and_then(|id| self.table.player(id))
            .ok_or(PlayError::PlayerNotFound)?;

        let cards: Option<Vec<Card>> = card_ids
            .iter()
            .map(|&id| to_card_id(id).and_then(|id| player.hand.get(id).copied()))
            .collect();

        Ok(cards.map_or(HandCategory::Invalid, |cards| {
            self.table.evaluate_hand(&cards)
        }))
    }

    fn activate(&self, player_id: u32) -> Result<Option<Move>, TableError> {
        let player_id = to_player_id(player_id).ok_or(TableError::PlayerNotFound)?;
        self.table.activate_player(player_id)
    }

    fn play_selection(&self, player_id: u32) -> Result<DiscardRecord, PlayError> {
        let player_id = to_player_id(player_id).ok_or(PlayError::PlayerNotFound)?;
        self.table.play_selected(player_id)
    }

    fn play_ids(&self, player_id: u32, card_ids: &[u32]) -> Result<DiscardRecord, PlayError> {
        let player_id = to_player_id(player_id).ok_or(PlayError::PlayerNotFound)?;
        let ids: Vec<CardId> = card_ids
            .iter()
            .map(|&id| to_card_id(id))
            .collect::<Option<_>>()
            .ok_or(PlayError::CardNotFound)?;
        self.table.play(player_id, &ids)
    }
}

fn to_player_id(id: u32) -> Option<PlayerId> {
    PlayerId::try_from(id).ok()
}

fn to_card_id(id: u32) -> Option<CardId> {
    u8::try_from(id).ok().map(CardId)
}

#[derive(Serialize)]
struct Snapshot {
    players: Vec<JsPlayer>,
    discards: Vec<JsDiscard>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    id: u32,
    key: String,
    selected: bool,
}

#[derive(Serialize)]
struct JsPlayer {
    id: u32,
    name: String,
    cards: Vec<JsCard>,
    is_human: bool,
    is_active: bool,
}

impl From<&Player> for JsPlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id as u32,
            name: player.name.clone(),
            cards: player.hand.cards().iter().map(card_to_js).collect(),
            is_human: player.is_human,
            is_active: player.is_active,
        }
    }
}

#[derive(Serialize)]
struct JsMove {
    category: &'static str,
    cards: Vec<JsCard>,
}

impl From<Move> for JsMove {
    fn from(play: Move) -> Self {
        Self {
            category: category_to_str(play.category),
            cards: play.cards.iter().map(card_to_js).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsDiscard {
    owner: u32,
    category: &'static str,
    cards: Vec<JsCard>,
}

impl From<DiscardRecord> for JsDiscard {
    fn from(record: DiscardRecord) -> Self {
        Self {
            owner: record.owner as u32,
            category: category_to_str(record.category),
            cards: record.cards.iter().map(card_to_js).collect(),
        }
    }
}

fn card_to_js(card: &Card) -> JsCard {
    JsCard {
        id: card.id.0 as u32,
        key: card.key(),
        selected: card.selected,
    }
}

fn category_to_str(category: HandCategory) -> &'static str {
    match category {
        HandCategory::Invalid => "Invalid",
        HandCategory::Single => "Single",
        HandCategory::Pair => "Pair",
        HandCategory::ThreeOfAKind => "ThreeOfAKind",
        HandCategory::Straight => "Straight",
        HandCategory::ThreePairStraight => "ThreePairStraight",
        HandCategory::FourOfAKind => "FourOfAKind",
        HandCategory::FourPairStraight => "FourPairStraight",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
