use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use huffcode::{Error, Huffman, MinHeap, Node, SortedArray, SortedList, input};

/// Build a Huffman code for one line of text and report the space it saves.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// File whose first line is encoded; stdin is read when omitted.
    file: Option<PathBuf>,

    /// Encode this text instead of reading a file.
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Priority queue used while merging nodes.
    #[arg(short, long, value_enum, default_value_t = Queue::SortedArray)]
    queue: Queue,

    /// Print the finished tree before the report.
    #[arg(long)]
    tree: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Queue {
    SortedArray,
    SortedList,
    Heap,
}

fn build_failed(e: Error) -> anyhow::Error {
    anyhow::Error::new(e).context("build the code")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let line = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => input::from_file(path)?,
        (None, None) => input::from_reader(io::stdin().lock())?,
    };

    let built = match args.queue {
        Queue::SortedArray => Huffman::with_queue::<SortedArray<Node>>(&line),
        Queue::SortedList => Huffman::with_queue::<SortedList<Node>>(&line),
        Queue::Heap => Huffman::with_queue::<MinHeap<Node>>(&line),
    };

    let huffman = match built {
        Ok(huffman) => huffman,
        Err(Error::EmptyInput) => {
            eprintln!("Data cannot be empty, must contain something.");
            return Ok(());
        }
        Err(e) => return Err(build_failed(e)),
    };

    if args.tree {
        println!("Huffman Tree:\n{}", huffman.root());
    }
    println!("{}", huffman.report()?);

    Ok(())
}
