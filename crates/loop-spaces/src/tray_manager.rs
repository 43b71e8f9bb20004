//! System tray icon and menu.
//!
//! The icon is a small grid of tiles drawn at startup. The tooltip shows the
//! hotkey that opens the switcher, or a warning when none is registered.

use crate::{AppError, AppResult, TrayAction};

use std::panic::Location;

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use loop_spaces_core::HotkeyBinding;
use tracing::{info, instrument};
use tray_icon::menu::{AboutMetadata, Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

pub(crate) const ICON_SIZE: u32 = 32;
pub(crate) const ABOUT_CREDITS: &str = "Switch between spaces from the keyboard.";
const GRID_COLUMNS: u32 = 3;
const GRID_ROWS: u32 = 2;
const TILE_GAP: u32 = 2;
const TILE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Ids of the menu items that map to a [`TrayAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayMenuIds {
    /// "Reload Settings".
    pub reload: MenuId,
    /// "Reset Preferences".
    pub reset: MenuId,
    /// "Quit".
    pub quit: MenuId,
}

impl TrayMenuIds {
    /// Which action a clicked menu item stands for.
    pub fn action_for(&self, id: &MenuId) -> Option<TrayAction> {
        if *id == self.reload {
            Some(TrayAction::ReloadSettings)
        } else if *id == self.reset {
            Some(TrayAction::ResetPreferences)
        } else if *id == self.quit {
            Some(TrayAction::Quit)
        } else {
            None
        }
    }
}

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    menu_ids: TrayMenuIds,
}

impl TrayManager {
    /// Create the tray icon with its menu.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let about_item =
            PredefinedMenuItem::about(Some("About LoopSpaces"), Some(about_metadata()));
        let reload_item = MenuItem::new("Reload Settings", true, None);
        let reset_item = MenuItem::new("Reset Preferences", true, None);
        let quit_item = MenuItem::new("Quit", true, None);

        let menu_ids = TrayMenuIds {
            reload: reload_item.id().clone(),
            reset: reset_item.id().clone(),
            quit: quit_item.id().clone(),
        };

        menu.append_items(&[
            &about_item,
            &PredefinedMenuItem::separator(),
            &reload_item,
            &reset_item,
            &PredefinedMenuItem::separator(),
            &quit_item,
        ])
        .map_err(|e| AppError::TrayError {
            reason: format!("Failed to build tray menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(tooltip(None))
            .with_menu(Box::new(menu))
            .with_icon(Self::load_icon()?)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            menu_ids,
        })
    }

    /// Show the registered binding in the tooltip, or that none is active.
    #[track_caller]
    pub fn set_binding(&mut self, binding: Option<&HotkeyBinding>) -> AppResult<()> {
        self.tray_icon
            .set_tooltip(Some(tooltip(binding)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Which action a clicked menu item stands for.
    pub fn action_for(&self, id: &MenuId) -> Option<TrayAction> {
        self.menu_ids.action_for(id)
    }

    #[track_caller]
    fn load_icon() -> AppResult<Icon> {
        let rgba = grid_icon(ICON_SIZE);
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Contents of the About dialog.
pub(crate) fn about_metadata() -> AboutMetadata {
    AboutMetadata {
        name: Some("LoopSpaces".to_string()),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        comments: Some(ABOUT_CREDITS.to_string()),
        credits: Some(ABOUT_CREDITS.to_string()),
        ..Default::default()
    }
}

/// Tooltip text for the current binding.
pub(crate) fn tooltip(binding: Option<&HotkeyBinding>) -> String {
    match binding {
        Some(binding) => format!("LoopSpaces - {} to switch", binding),
        None => "LoopSpaces - no hotkey registered".to_string(),
    }
}

/// Draw a `size` x `size` icon: a 3x2 grid of opaque tiles on a clear background.
pub(crate) fn grid_icon(size: u32) -> RgbaImage {
    let tile_width = size.saturating_sub(TILE_GAP * (GRID_COLUMNS + 1)) / GRID_COLUMNS;
    let tile_height = tile_width;
    let grid_height = GRID_ROWS * tile_height + (GRID_ROWS - 1) * TILE_GAP;
    let top = size.saturating_sub(grid_height) / 2;

    RgbaImage::from_fn(size, size, |x, y| {
        if x < TILE_GAP || y < top || tile_width == 0 {
            return CLEAR;
        }

        let (cx, cy) = (x - TILE_GAP, y - top);
        let (column, row) = (cx / (tile_width + TILE_GAP), cy / (tile_height + TILE_GAP));
        let inside_tile = cx % (tile_width + TILE_GAP) < tile_width
            && cy % (tile_height + TILE_GAP) < tile_height;

        if column < GRID_COLUMNS && row < GRID_ROWS && inside_tile {
            TILE_COLOR
        } else {
            CLEAR
        }
    })
}
