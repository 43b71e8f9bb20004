mod hotkey;
mod overlay;
