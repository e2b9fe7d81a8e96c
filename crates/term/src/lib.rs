//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! - [`canvas`]: the pixel-style [`Canvas`] contract scene code draws through
//! - [`game_view`]: board, HUD and overlays for a [`core::GameSnapshot`]
//! - [`renderer`]: terminal setup/teardown and diffed flushing
//! - [`pacer`]: soft frame cap and FPS measurement
//!
//! A board tile is 2 columns by 1 row by default, which roughly compensates
//! for the aspect ratio of terminal glyphs.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod pacer;
pub mod renderer;

pub use tui_pacbomb_core as core;
pub use tui_pacbomb_types as types;

pub use canvas::{Canvas, FrameCanvas};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{draw_scene, AnchorY, GameView, Viewport};
pub use pacer::{FpsCounter, FramePacer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, WINDOW_TITLE};
