//! Browser-facing bindings. Values cross the boundary as plain JS objects
//! produced by `serde-wasm-bindgen`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::game::GameInstance;

#[wasm_bindgen]
pub struct WasmGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl WasmGame {
    /// `options` may be `undefined` or an object such as `{ searchDepth: 3 }`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<WasmGame, JsError> {
        let config = if options.is_undefined() || options.is_null() {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value::<EngineConfig>(options)
                .map_err(|err| ConfigError::Options(err.to_string()))?
        };
        let inner = GameInstance::new_with_default_selector(config)?;
        Ok(Self { inner })
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_state())
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.legal_moves())
    }

    #[wasm_bindgen(js_name = movesFrom)]
    pub fn moves_from(&self, row: u8, col: u8) -> Result<JsValue, JsError> {
        to_js(&self.inner.legal_moves_from(row, col))
    }

    /// Plays the human move and returns the new state.
    pub fn place(
        &mut self,
        start_row: u8,
        start_col: u8,
        end_row: u8,
        end_col: u8,
    ) -> Result<JsValue, JsError> {
        self.inner.place(start_row, start_col, end_row, end_col)?;
        self.state()
    }

    /// Plays the computer's reply and returns the new state.
    #[wasm_bindgen(js_name = aiMove)]
    pub fn ai_move(&mut self) -> Result<JsValue, JsError> {
        self.inner.do_ai_move()?;
        self.state()
    }

    #[wasm_bindgen(js_name = bestMove)]
    pub fn best_move(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.best_opponent_move())
    }

    /// `1` light wins, `-1` dark wins, `2` ongoing.
    pub fn terminal(&self) -> i8 {
        self.inner.terminal().code()
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_result())
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsError::new(&err.to_string()))
}
