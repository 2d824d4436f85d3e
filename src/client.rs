use std::net::TcpStream;

use log::debug;
use tungstenite::stream::MaybeTlsStream;
use tungstenite::{Message, WebSocket};

use crate::common::PingMessage;
use crate::{BznError, Result};

/// A single blocking websocket connection to a bzn daemon.
///
/// The socket is owned by this handle for one control-flow span: opened by
/// [`WsConnection::connect`], used, and released by [`WsConnection::close`]
/// (or on drop). The handle is passed explicitly wherever it is used; there
/// is no ambient shared connection.
pub struct WsConnection {
    socket: WebSocket<MaybeTlsStream<TcpStream>>,
}

impl WsConnection {
    /// Opens a blocking websocket connection to `ws://{host}:{port}`.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let url = format!("ws://{}:{}", host, port);
        debug!("Connecting to {}", url);
        let (socket, _response) = tungstenite::connect(&url).map_err(BznError::Connection)?;
        Ok(Self { socket })
    }

    /// Sends one text frame.
    pub fn send(&mut self, text: &str) -> Result<()> {
        debug!("Sending frame: {}", text);
        self.socket
            .send(Message::Text(text.to_owned()))
            .map_err(BznError::Send)
    }

    /// Blocks until the next text frame arrives and returns its content.
    ///
    /// Control frames (ping/pong) are skipped; a close frame or a binary
    /// frame surfaces as an error since the protocol is text-only.
    pub fn recv_text(&mut self) -> Result<String> {
        loop {
            match self.socket.read().map_err(BznError::Receive)? {
                Message::Text(text) => {
                    debug!("Received frame: {}", text);
                    return Ok(text);
                }
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => continue,
                Message::Binary(_) => return Err(BznError::UnexpectedFrame),
                Message::Close(_) => return Err(BznError::ConnectionClosed),
            }
        }
    }

    /// Closes the connection, completing the websocket close handshake.
    pub fn close(mut self) -> Result<()> {
        self.socket.close(None).map_err(BznError::Send)?;
        loop {
            match self.socket.read() {
                Ok(_) => continue,
                Err(tungstenite::Error::ConnectionClosed) => return Ok(()),
                Err(e) => return Err(BznError::Receive(e)),
            }
        }
    }
}

/// The ping client: sends sequentially numbered ping messages over a single
/// connection, one reply per send.
pub struct PingClient;

impl PingClient {
    /// Opens one connection to `ws://{host}:{port}`, sends `count` ping
    /// messages with `data` = 0..count, reading one reply before the next
    /// send, then closes the connection.
    ///
    /// Returns the raw reply texts in send order. Any connect, send, or
    /// receive failure aborts the run; there is no retry and no partial
    /// result.
    pub fn run(host: &str, port: u16, count: u64) -> Result<Vec<String>> {
        let mut conn = WsConnection::connect(host, port)?;
        let mut replies = Vec::with_capacity(count as usize);
        for seq in 0..count {
            let frame = serde_json::to_string(&PingMessage::new(seq))?;
            conn.send(&frame)?;
            replies.push(conn.recv_text()?);
        }
        conn.close()?;
        Ok(replies)
    }
}
