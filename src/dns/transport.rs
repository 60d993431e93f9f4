//! Raw DNS message exchange over UDP and TCP.
//!
//! Each call performs one request/response exchange on a fresh socket.
//! Timeouts are applied by the caller around the whole exchange.

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};

use crate::config::{MAX_TCP_MESSAGE_SIZE, MAX_UDP_PAYLOAD};

use super::types::Protocol;

/// Sends `query` to `server` and returns the raw response bytes.
pub async fn exchange(protocol: Protocol, server: SocketAddr, query: &[u8]) -> io::Result<Vec<u8>> {
    match protocol {
        Protocol::Udp => exchange_udp(server, query).await,
        Protocol::Tcp => exchange_tcp(server, query).await,
    }
}

async fn exchange_udp(server: SocketAddr, query: &[u8]) -> io::Result<Vec<u8>> {
    let bind_addr: SocketAddr = if server.is_ipv4() {
        (Ipv4Addr::UNSPECIFIED, 0).into()
    } else {
        (Ipv6Addr::UNSPECIFIED, 0).into()
    };

    let socket = UdpSocket::bind(bind_addr).await?;
    // A connected socket drops datagrams from any other source.
    socket.connect(server).await?;
    let sent = socket.send(query).await?;
    log::trace!("Sent {sent} bytes over UDP to {server}");

    let mut buf = vec![0u8; usize::from(MAX_UDP_PAYLOAD)];
    let received = socket.recv(&mut buf).await?;
    buf.truncate(received);
    log::trace!("Received {received} bytes over UDP from {server}");
    Ok(buf)
}

async fn exchange_tcp(server: SocketAddr, query: &[u8]) -> io::Result<Vec<u8>> {
    let len = u16::try_from(query.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("query of {} bytes exceeds TCP framing", query.len()),
        )
    })?;

    let mut stream = TcpStream::connect(server).await?;
    stream.set_nodelay(true)?;

    let mut framed = Vec::with_capacity(query.len() + 2);
    framed.extend_from_slice(&len.to_be_bytes());
    framed.extend_from_slice(query);
    stream.write_all(&framed).await?;
    log::trace!("Sent {} bytes over TCP to {server}", query.len());

    let response_len = usize::from(stream.read_u16().await?);
    if response_len == 0 || response_len > MAX_TCP_MESSAGE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid TCP response length {response_len}"),
        ));
    }

    let mut buf = vec![0u8; response_len];
    stream.read_exact(&mut buf).await?;
    log::trace!("Received {response_len} bytes over TCP from {server}");
    Ok(buf)
}
