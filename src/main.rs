use footsteps::io::{ConsoleBidSource, ConsoleRenderer};

fn main() {
    let mut bids = ConsoleBidSource::new();
    let mut renderer = ConsoleRenderer::new();

    renderer.show_start_screen();
    footsteps::play(&mut bids, &mut renderer);
}
