//! Tertulia server library: connection dispatch over TCP
//!
//! One worker task per accepted connection, unbounded, with the shared
//! message store behind the request handler. Worker faults are contained to
//! their own connection; a fault in `accept` itself is fatal.

pub mod seed;

use std::net::SocketAddr;
use std::time::Duration;
use tertulia_core::{read_request, ChatError, MessageStore, RequestHandler, Result, ServerConfig};
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

/// The chat server: a bound listener plus the shared request handler
#[derive(Debug)]
pub struct ChatServer {
    listener: TcpListener,
    handler: RequestHandler,
    read_timeout: Option<Duration>,
}

impl ChatServer {
    /// Bind the listener and prepare the handler.
    ///
    /// # Errors
    /// Returns an error when the configured address cannot be bound.
    pub async fn bind(
        config: &ServerConfig,
        store: MessageStore,
        template: String,
    ) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ChatError::Configuration(format!("Failed to bind to {addr}: {e}")))?;
        info!("Chat server listening on {}", addr);

        Ok(Self {
            listener,
            handler: RequestHandler::new(store, template),
            read_timeout: config.read_timeout_secs.map(Duration::from_secs),
        })
    }

    /// Address the listener is bound to
    ///
    /// # Errors
    /// Returns an error when the local address cannot be queried.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever, spawning one worker per connection.
    ///
    /// The loop never waits on a worker. Worker faults are logged and the
    /// connection abandoned without touching other connections. An `accept`
    /// fault is fatal: it is logged and returned, ending the server.
    pub async fn serve(&self) -> Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    debug!("Connection from {}", addr);
                    let handler = self.handler.clone();
                    let read_timeout = self.read_timeout;
                    tokio::spawn(async move {
                        let worker = handle_connection(stream, handler);
                        let outcome = match read_timeout {
                            Some(limit) => match tokio::time::timeout(limit, worker).await {
                                Ok(outcome) => outcome,
                                Err(_) => {
                                    warn!(
                                        "Connection from {} exceeded read deadline, dropping",
                                        addr
                                    );
                                    return;
                                }
                            },
                            None => worker.await,
                        };
                        if let Err(e) = outcome {
                            warn!("Connection from {} abandoned ({}): {}", addr, e.code(), e);
                        }
                    });
                }
                Err(e) => {
                    error!("Failed to accept connection: {}", e);
                    return Err(ChatError::Io(e));
                }
            }
        }
    }
}

/// One worker: read the request, produce the response, write it back, close.
async fn handle_connection(stream: TcpStream, handler: RequestHandler) -> Result<()> {
    let (reader_half, mut writer_half) = stream.into_split();
    let mut reader = BufReader::new(reader_half);

    let request = read_request(&mut reader).await?;

    match handler.respond(&request).await {
        Some(response) => {
            writer_half.write_all(&response).await?;
            writer_half.flush().await?;
            debug!("Response written, closing connection");
        }
        None => debug!("Closing connection without a response"),
    }

    Ok(())
}
