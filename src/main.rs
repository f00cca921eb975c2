fn main() {
    vsf_setup::app::cli::run();
}
