pub mod code_display;
