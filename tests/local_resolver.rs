//! Full audits through the network client against an in-process DNS server.

use std::net::SocketAddr;

use hickory_proto::op::{Edns, Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};

use dns_audit::{run_audit, Config};

/// Answers from a small zone:
/// - `example.test` A 192.0.2.1 (TTL 300) and TXT "hello" "world"
/// - `gone.test` NXDOMAIN
/// - `refused.test` REFUSED
/// - anything else NOERROR without answers
fn respond(query: &Message) -> Vec<u8> {
    let question = query.queries()[0].clone();
    let name = question.name().to_ascii();
    let mut response = Message::new();
    response
        .set_id(query.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(query.recursion_desired())
        .set_recursion_available(true)
        .add_query(question.clone());

    let owner = Name::from_ascii(&name).unwrap();
    match (name.as_str(), question.query_type()) {
        ("example.test.", RecordType::A) => {
            response.add_answer(Record::from_rdata(
                owner,
                300,
                RData::A(A::new(192, 0, 2, 1)),
            ));
        }
        ("example.test.", RecordType::TXT) => {
            response.add_answer(Record::from_rdata(
                owner,
                60,
                RData::TXT(TXT::new(vec!["hello".to_string(), "world".to_string()])),
            ));
        }
        ("gone.test.", _) => {
            response.set_response_code(ResponseCode::NXDomain);
        }
        ("refused.test.", _) => {
            response.set_response_code(ResponseCode::Refused);
        }
        _ => {}
    }

    let mut edns = Edns::new();
    edns.set_max_payload(1232).set_version(0);
    response.set_edns(edns);
    response.to_vec().unwrap()
}

async fn spawn_udp_server() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    tokio::spawn(async move {
        let mut buf = [0u8; 4096];
        loop {
            let Ok((n, peer)) = socket.recv_from(&mut buf).await else {
                return;
            };
            let query = Message::from_vec(&buf[..n]).unwrap();
            let _ = socket.send_to(&respond(&query), peer).await;
        }
    });
    addr
}

async fn spawn_tcp_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let len = usize::from(stream.read_u16().await.unwrap());
                let mut buf = vec![0u8; len];
                stream.read_exact(&mut buf).await.unwrap();
                let reply = respond(&Message::from_vec(&buf).unwrap());
                stream.write_u16(reply.len() as u16).await.unwrap();
                stream.write_all(&reply).await.unwrap();
            });
        }
    });
    addr
}

fn write_hosts(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("hosts.txt");
    std::fs::write(&path, contents).unwrap();
    path
}

async fn audit(server: SocketAddr, tcp: bool) -> Vec<serde_json::Value> {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("dns_results.jsonl");
    let config = Config {
        input: write_hosts(&dir, "example.test\ngone.test\nrefused.test\nempty.test\n"),
        output: output.clone(),
        server: Some(server.to_string()),
        records: "A,TXT".to_string(),
        timeout_seconds: 5,
        tcp,
        max_concurrency: 4,
        ..Default::default()
    };

    let report = run_audit(config).await.unwrap();
    assert_eq!(report.total_queries, 8);
    assert_eq!(report.successful, 2);
    assert_eq!(report.failed, 6);

    std::fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn check_rows(rows: &[serde_json::Value], server: SocketAddr) {
    assert_eq!(rows.len(), 8);
    let server_label = format!("{}:{}", server.ip(), server.port());
    for row in rows {
        assert_eq!(row["dns_server"], server_label.as_str());
    }

    let a = &rows[0];
    assert_eq!(a["hostname"], "example.test");
    assert_eq!(a["record_type"], "A");
    assert_eq!(a["status"], "The DNS has responded");
    assert_eq!(a["rcode"], "NOERROR");
    assert_eq!(a["flags"], "QR RD RA");
    assert_eq!(a["edns"], 0);
    assert_eq!(a["payload"], 1232);
    assert_eq!(a["A-1"], "192.0.2.1");
    assert_eq!(a["A-class1"], "IN");
    assert_eq!(a["A-ttl1"], 300);
    assert_eq!(a["A records"], 1);
    assert_eq!(a["TXT records"], 0);
    assert_eq!(a["CNAME records"], 0);

    let txt = &rows[1];
    assert_eq!(txt["TXT-1"], "\"hello\"; \"world\"");
    assert_eq!(txt["TXT-ttl1"], 60);

    for row in &rows[2..4] {
        assert_eq!(row["hostname"], "gone.test");
        assert_eq!(row["status"], "The DNS query name does not exist");
        assert!(row.get("id").is_none());
    }
    for row in &rows[4..6] {
        assert_eq!(row["status"], "The DNS server answered REFUSED");
    }
    for row in &rows[6..8] {
        assert_eq!(
            row["status"],
            "The DNS response does not contain an answer to the question"
        );
    }
}

#[tokio::test]
async fn test_audit_over_udp() {
    let server = spawn_udp_server().await;
    let rows = audit(server, false).await;
    check_rows(&rows, server);
}

#[tokio::test]
async fn test_audit_over_tcp() {
    let server = spawn_tcp_server().await;
    let rows = audit(server, true).await;
    check_rows(&rows, server);
}
