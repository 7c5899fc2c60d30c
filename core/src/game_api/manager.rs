use std::cell::RefCell;
use std::collections::HashMap;

use super::ActiveGame;

#[derive(Default)]
struct GameManager {
    next_handle: u32,
    games: HashMap<u32, ActiveGame>,
}

impl GameManager {
    fn create_game(&mut self, game: ActiveGame) -> u32 {
        self.next_handle = self.next_handle.saturating_add(1).max(1);
        let handle = self.next_handle;
        self.games.insert(handle, game);
        handle
    }

    fn destroy_game(&mut self, handle: u32) -> bool {
        self.games.remove(&handle).is_some()
    }
}

thread_local! {
    static MANAGER: RefCell<GameManager> = RefCell::new(GameManager::default());
}

pub(super) fn create_game(game: ActiveGame) -> u32 {
    MANAGER.with(|manager| manager.borrow_mut().create_game(game))
}

pub(super) fn destroy_game(handle: u32) -> bool {
    MANAGER.with(|manager| manager.borrow_mut().destroy_game(handle))
}

pub(super) fn with_game_mut<T>(handle: u32, f: impl FnOnce(&mut ActiveGame) -> T) -> Option<T> {
    MANAGER.with(|manager| {
        let mut manager = manager.borrow_mut();
        manager.games.get_mut(&handle).map(f)
    })
}

pub(super) fn with_game<T>(handle: u32, f: impl FnOnce(&ActiveGame) -> T) -> Option<T> {
    MANAGER.with(|manager| {
        let manager = manager.borrow();
        manager.games.get(&handle).map(f)
    })
}
