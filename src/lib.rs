//! Bézier Drag Demo Library.
//! Kurven-Auswertung, Interaktions-Controller und UI als Library exportiert für Tests.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DragState, PointerDispatcher, PointerEvent,
    PointerEventKind, PointerHandler, PointerSurface,
};
pub use core::{cubic_bezier, sample_cubic, ControlPoints, SampledCurve};
pub use shared::{DataBounds, DemoOptions, RenderScene};
