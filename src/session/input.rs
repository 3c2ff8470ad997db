use std::io::{self, Write};

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

/// Where answers come from.
///
/// `ask` shows the prompt and waits for one line. It is the only place a quiz
/// session suspends, and dropping the returned future abandons the wait.
#[async_trait]
pub trait AnswerSource: Send {
    /// Writes `prompt` and reads a single line.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Line-oriented answers: prompts go to `out`, answers come from `input`.
pub struct LineAnswers<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> LineAnswers<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }
}

impl LineAnswers<BufReader<Stdin>, io::Stdout> {
    /// The interactive terminal: tokio stdin for answers, stdout for prompts.
    pub fn terminal() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), io::stdout())
    }
}

#[async_trait]
impl<R, W> AnswerSource for LineAnswers<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        self.lines.next_line().await
    }
}
