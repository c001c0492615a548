fn main() {
    rcflow::app::cli::run();
}
