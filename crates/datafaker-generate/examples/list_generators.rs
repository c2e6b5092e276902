use datafaker_generate::FakeProducer;

fn main() {
    for name in FakeProducer::supported_names() {
        println!("{name}");
    }
}
