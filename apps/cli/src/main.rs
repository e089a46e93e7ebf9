fn main() -> anyhow::Result<()> {
    vocab_flashcards::run()
}
