// Console confirmation lines. Diagnostics go through tracing instead.

#[macro_export]
macro_rules! ui_ok {
    ($color:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        if $color {
            use owo_colors::OwoColorize;
            println!("{} {}", "✔".green(), msg.bold());
        } else {
            println!("✔ {}", msg);
        }
    }};
}
