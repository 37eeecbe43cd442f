use std::fmt::Display;

const INDENT: &str = "  ";
const BULLET: &str = "•";

/// Prints one bullet point per line. [BulletPointPrinter::nested] returns a
/// printer whose bullets sit one level deeper.
pub struct BulletPointPrinter<W: LineWriter + Clone> {
    writer: W,
    depth: usize,
}

impl<W: LineWriter + Clone> BulletPointPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, depth: 0 }
    }

    pub fn print_item(&self, message: impl Display) {
        self.writer
            .write_line(&format!("{}{BULLET} {message}", INDENT.repeat(self.depth)));
    }

    pub fn nested(&self) -> Self {
        Self {
            writer: self.writer.clone(),
            depth: self.depth + 1,
        }
    }
}

impl BulletPointPrinter<StdoutLineWriter> {
    pub fn new_stdout() -> Self {
        Self::new(StdoutLineWriter)
    }
}

pub trait LineWriter {
    fn write_line(&self, line: &str);
}

#[derive(Clone, Copy)]
pub struct StdoutLineWriter;

impl LineWriter for StdoutLineWriter {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}
