use wasm_bindgen::prelude::*;

mod game;
mod world;
use game::ChestRoom;

tilewalk_web::export_game!(ChestRoom, "chest-room");
