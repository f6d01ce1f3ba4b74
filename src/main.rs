fn main() {
    env_logger::init();
    log::info!("Packed move inspector");
    packed_move::terminal::run_interactive_terminal();
}
