use std::io;

use quiz_core::session::RenderInstruction;
use services::{LoadStatus, QuizService};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::intent::Intent;
use crate::screen::Screen;
use crate::vm::{QuestionVm, StatusVm, render_lines};

const TITLE: &str = "Character Quiz";
const PROMPT: &str = "> ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end: reads intents, drives `QuizService`, prints render
/// instructions.
pub struct TerminalApp {
    service: QuizService,
    screen: Screen,
    options: Vec<String>,
}

impl TerminalApp {
    #[must_use]
    pub fn new(service: QuizService) -> Self {
        Self {
            service,
            screen: Screen::Start,
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn service(&self) -> &QuizService {
        &self.service
    }

    /// Run until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `reader` or `writer`.
    pub async fn run<R, W>(&mut self, reader: R, writer: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.show_start(writer).await?;
        self.preload(writer).await?;

        let mut lines = reader.lines();
        loop {
            write_raw(writer, PROMPT).await?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            let flow = match Intent::parse(&line) {
                Some(intent) => self.handle(intent, writer).await?,
                None if line.trim().is_empty() => Flow::Continue,
                None => {
                    write_lines(writer, &["Unrecognised input. Type h for help.".to_string()])
                        .await?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        write_lines(writer, &["Bye!".to_string()]).await
    }

    async fn preload<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if let Some(message) = LoadStatus::Loading.message() {
            write_lines(writer, &StatusVm::from_status(&message).lines()).await?;
        }
        if let Err(err) = self.service.preload().await {
            tracing::debug!(error = %err, "preload failed; start will retry");
        }
        self.write_status(writer).await
    }

    async fn handle<W>(&mut self, intent: Intent, writer: &mut W) -> io::Result<Flow>
    where
        W: AsyncWrite + Unpin,
    {
        match (self.screen, intent) {
            (_, Intent::Quit) => return Ok(Flow::Quit),
            (_, Intent::Help) => write_lines(writer, &help_lines(self.screen)).await?,
            (Screen::Start, Intent::Start) => {
                let instruction = self.service.start().await;
                self.show(&instruction, writer).await?;
            }
            (Screen::Quiz, Intent::Select(number)) => self.select(number, writer).await?,
            (Screen::Quiz, Intent::Next) => self.advance(writer).await?,
            (Screen::Quiz | Screen::Results, Intent::Restart) => {
                self.service.reset();
                self.options.clear();
                self.show_start(writer).await?;
            }
            (screen, other) => {
                tracing::debug!(?screen, ?other, "intent not available on this screen");
                write_lines(writer, &help_lines(screen)).await?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn select<W>(&mut self, number: usize, writer: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let picked = number
            .checked_sub(1)
            .and_then(|idx| self.options.get(idx))
            .cloned();
        let Some(option) = picked else {
            let hint = match self.options.len() {
                0 => "This question has no options. Type n to skip it.".to_string(),
                len => format!("Choose an option between 1 and {len}."),
            };
            return write_lines(writer, &[hint]).await;
        };

        match self.service.select_option(&option) {
            Ok(Some(instruction)) => self.show(&instruction, writer).await,
            Ok(None) => {
                write_lines(
                    writer,
                    &["Already answered. Type n for the next question.".to_string()],
                )
                .await
            }
            Err(err) => {
                tracing::error!(error = %err, "selection rejected");
                Ok(())
            }
        }
    }

    async fn advance<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        match self.service.advance() {
            Ok(Some(instruction)) => self.show(&instruction, writer).await,
            // A question without options is revealed and then moved past on the next `n`.
            Ok(None) if self.options.is_empty() => match self.service.pass() {
                Ok(Some(instruction)) => self.show(&instruction, writer).await,
                Ok(None) => Ok(()),
                Err(err) => {
                    tracing::error!(error = %err, "pass rejected");
                    Ok(())
                }
            },
            Ok(None) => write_lines(writer, &["Pick an answer first.".to_string()]).await,
            Err(err) => {
                tracing::error!(error = %err, "advance rejected");
                Ok(())
            }
        }
    }

    async fn show<W>(&mut self, instruction: &RenderInstruction, writer: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if let Some(question) = QuestionVm::from_instruction(instruction) {
            self.options = question.option_texts();
        }
        self.screen = Screen::from(self.service.phase());
        write_lines(writer, &render_lines(instruction)).await
    }

    async fn show_start<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        self.screen = Screen::Start;
        let mut lines = vec![String::new(), TITLE.to_string()];
        lines.extend(help_lines(Screen::Start));
        write_lines(writer, &lines).await
    }

    async fn write_status<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        match self.service.status_message() {
            Some(message) => write_lines(writer, &StatusVm::from_status(&message).lines()).await,
            None => Ok(()),
        }
    }
}

fn help_lines(screen: Screen) -> Vec<String> {
    let text = match screen {
        Screen::Start => "Type s to start the quiz, q to quit.",
        Screen::Quiz => "Type an option number to answer, n for the next question, r to restart, q to quit.",
        Screen::Results => "Type r to play again, q to quit.",
    };
    vec![text.to_string()]
}

async fn write_lines<W>(writer: &mut W, lines: &[String]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    for line in lines {
        writer.write_all(line.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await
}

async fn write_raw<W>(writer: &mut W, text: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.flush().await
}
