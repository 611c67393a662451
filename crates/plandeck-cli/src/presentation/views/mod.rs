// Layout and styling for the text output path: `fmt::Display` impls for the
// task view models. Color is applied only when stdout is a terminal.
mod task;
