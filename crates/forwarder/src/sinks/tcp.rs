//! TcpSink - plain TCP stream to a line-oriented collector

use contracts::{ContractError, LineSink, LogLine, SinkEndpoint};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, instrument};

/// Sink that writes UTF-8 lines to one TCP connection
///
/// There is no reconnect: once the stream breaks every later write fails
/// and is reported on its own.
pub struct TcpSink {
    name: String,
    stream: Option<TcpStream>,
}

impl TcpSink {
    /// Open the connection
    ///
    /// No timeout beyond what the OS applies to the connect attempt.
    #[instrument(name = "tcp_sink_connect", skip(endpoint), fields(sink = %endpoint))]
    pub async fn connect(endpoint: &SinkEndpoint) -> Result<Self, ContractError> {
        let name = endpoint.address();
        let stream = TcpStream::connect((endpoint.host.as_str(), endpoint.port))
            .await
            .map_err(|e| ContractError::sink_connection(&name, e.to_string()))?;

        debug!(sink = %name, peer = ?stream.peer_addr().ok(), "TcpSink connected");

        Ok(Self::from_stream(name, stream))
    }

    /// Wrap an already connected stream
    pub fn from_stream(name: impl Into<String>, stream: TcpStream) -> Self {
        Self {
            name: name.into(),
            stream: Some(stream),
        }
    }

    fn stream(&mut self) -> Result<&mut TcpStream, ContractError> {
        self.stream
            .as_mut()
            .ok_or_else(|| ContractError::sink_write(&self.name, "socket not connected"))
    }
}

impl LineSink for TcpSink {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "tcp_sink_write",
        skip(self, line),
        fields(sink = %self.name, bytes = line.len())
    )]
    async fn write(&mut self, line: &LogLine) -> Result<(), ContractError> {
        let name = self.name.clone();
        self.stream()?
            .write_all(line.as_bytes())
            .await
            .map_err(|e| ContractError::sink_write(name, e.to_string()))
    }

    #[instrument(name = "tcp_sink_flush", skip(self))]
    async fn flush(&mut self) -> Result<(), ContractError> {
        let name = self.name.clone();
        match self.stream.as_mut() {
            Some(stream) => stream
                .flush()
                .await
                .map_err(|e| ContractError::sink_write(name, e.to_string())),
            None => Ok(()),
        }
    }

    #[instrument(name = "tcp_sink_close", skip(self))]
    async fn close(&mut self) -> Result<(), ContractError> {
        if let Some(mut stream) = self.stream.take() {
            stream
                .shutdown()
                .await
                .map_err(|e| ContractError::sink_close(&self.name, e.to_string()))?;
        }
        debug!(sink = %self.name, "TcpSink closed");
        Ok(())
    }
}
