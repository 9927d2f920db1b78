fn main() {
  inscription_decoder::main();
}
