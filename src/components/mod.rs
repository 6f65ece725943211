pub mod buffer_tray;
pub mod controls;
pub mod drag;
pub mod polygon_shape;
pub mod status_bar;
pub mod workspace_view;
