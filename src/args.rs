use crate::mode::Mode;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Live hand gesture, face and emotion overlay", long_about = None)]
pub struct Args {
    /// Print status to the terminal and read commands from stdin instead of opening a window
    #[arg(long)]
    pub console: bool,

    /// Analysis to run when the app starts
    #[arg(short, long, value_enum, default_value_t = Mode::Idle)]
    pub mode: Mode,

    /// Pixel distance under which fingertips count as touching
    #[arg(long, default_value_t = 30.0)]
    pub threshold: f64,

    /// Camera index
    #[arg(short, long, default_value_t = 0)]
    pub cam_index: u32,

    /// Fraction of camera reads that yield no frame
    #[arg(long, default_value_t = 0.0)]
    pub drop_rate: f32,
}
