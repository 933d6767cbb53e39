mod console_test;
mod gui_test;
