fn main() {
    runic::cli::run();
}
