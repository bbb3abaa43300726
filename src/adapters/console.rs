use crate::config::toml_config::OutputFormat;
use crate::core::{Display, Message, Prompter, Result};
use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stderr, Stdin, Stdout,
};
use tokio::sync::Mutex;

/// 從 reader 讀一行作為回答；讀到結尾視為取消
///
/// 提示寫到 stderr，stdout 只留給結果。
pub struct ConsolePrompter<R = BufReader<Stdin>, W = Stderr> {
    reader: Mutex<R>,
    writer: Mutex<W>,
}

impl ConsolePrompter {
    pub fn new() -> Self {
        Self::with_io(BufReader::new(tokio::io::stdin()), tokio::io::stderr())
    }
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> ConsolePrompter<R, W> {
    pub fn with_io(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(reader),
            writer: Mutex::new(writer),
        }
    }

    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<R, W> Prompter for ConsolePrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn prompt(&self, message: &str) -> Result<Option<String>> {
        {
            let mut writer = self.writer.lock().await;
            writer.write_all(format!("{} ", message).as_bytes()).await?;
            writer.flush().await?;
        }

        let mut line = Vec::new();
        let read = self.reader.lock().await.read_until(b'\n', &mut line).await?;
        if read == 0 {
            tracing::debug!("input closed at prompt: {}", message);
            return Ok(None);
        }

        // 非 UTF-8 的位元組變成替換字元，之後由解析階段拒絕
        let text = String::from_utf8_lossy(&line);
        Ok(Some(text.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// 結果寫到 out，輸入錯誤寫到 err
pub struct ConsoleDisplay<O = Stdout, E = Stderr> {
    format: OutputFormat,
    out: Mutex<O>,
    err: Mutex<E>,
}

impl ConsoleDisplay {
    pub fn new(format: OutputFormat) -> Self {
        Self::with_writers(format, tokio::io::stdout(), tokio::io::stderr())
    }
}

impl<O, E> ConsoleDisplay<O, E> {
    pub fn with_writers(format: OutputFormat, out: O, err: E) -> Self {
        Self {
            format,
            out: Mutex::new(out),
            err: Mutex::new(err),
        }
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }
}

#[async_trait]
impl<O, E> Display for ConsoleDisplay<O, E>
where
    O: AsyncWrite + Unpin + Send,
    E: AsyncWrite + Unpin + Send,
{
    async fn show(&self, message: &Message) -> Result<()> {
        let text = format_message(message, self.format)?;

        if message.is_error() {
            let mut err = self.err.lock().await;
            err.write_all(text.as_bytes()).await?;
            err.flush().await?;
        } else {
            let mut out = self.out.lock().await;
            out.write_all(text.as_bytes()).await?;
            out.flush().await?;
        }
        Ok(())
    }
}

pub fn format_message(message: &Message, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n", message.body)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(message)?)),
    }
}
