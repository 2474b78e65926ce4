fn main() {
    reactvolt_frontend::start();
}
