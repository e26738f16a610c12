//! frame-dump: decode an Ethernet / IPv4 / TCP frame given as hex
//!
//! # Usage
//!
//! ```bash
//! # Frame as an argument (whitespace and ':' separators are ignored)
//! frame-dump "00 11 22 33 44 55 00 1a 2b 3c 4d 5e 08 00 45 00 ..."
//!
//! # Frame on stdin, verbose decoding steps
//! xxd -p capture.bin | frame-dump --verbose
//!
//! # Fields stored in host byte order instead of network order
//! frame-dump --endian native "..."
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use fixed_layout::net::{ETHERTYPE_IPV4, EthernetFrame, IPPROTO_TCP, Ipv4Header, TcpHeader};
use fixed_layout::{Decoder, Endian};
use std::io::{Read, Write};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "frame-dump")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Decode Ethernet, IPv4 and TCP headers from a hex-encoded frame")]
#[command(long_about = None)]
struct Cli {
    /// Hex-encoded frame; read from stdin when omitted
    frame: Option<String>,

    /// Byte order of multi-byte header fields (network, big, little, native)
    #[arg(short, long, default_value = "network")]
    endian: Endian,

    /// Maximum number of payload bytes to print
    #[arg(long, default_value = "64")]
    payload_limit: usize,

    /// Verbose mode (log each decoding step)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("frame_dump=debug,fixed_layout=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("frame_dump=warn"))
    };
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let frame = read_frame(cli.frame.as_deref())?;
    tracing::debug!(bytes = frame.len(), endian = ?cli.endian, "Decoding frame");

    let stdout = std::io::stdout();
    dump(&frame, cli.endian, cli.payload_limit, &mut stdout.lock())
}

fn read_frame(arg: Option<&str>) -> Result<Vec<u8>> {
    match arg {
        Some(text) => parse_hex(text),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read frame from stdin")?;
            parse_hex(&text)
        }
    }
}

/// Hex digits to bytes; whitespace and ':' separators are ignored.
fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    if digits.is_empty() {
        bail!("empty frame");
    }
    hex::decode(&digits).context("Frame is not valid hex")
}

fn dump(frame: &[u8], endian: Endian, payload_limit: usize, out: &mut impl Write) -> Result<()> {
    let mut decoder = Decoder::new(frame, endian);

    let eth: EthernetFrame = decoder.decode().context("Truncated Ethernet header")?;
    writeln!(out, "Ethernet")?;
    writeln!(out, "  destination  {}", eth.destination)?;
    writeln!(out, "  source       {}", eth.source)?;
    writeln!(out, "  ethertype    0x{:04X}", eth.ethertype)?;

    if eth.ethertype != ETHERTYPE_IPV4 {
        tracing::debug!(ethertype = eth.ethertype, "Not IPv4, stopping");
        return write_payload(&decoder, payload_limit, out);
    }

    let ip: Ipv4Header = decoder.decode().context("Truncated IPv4 header")?;
    writeln!(out, "IPv4")?;
    writeln!(out, "  version      {}", ip.version())?;
    writeln!(out, "  header len   {}", ip.header_len())?;
    writeln!(out, "  total len    {}", ip.total_length)?;
    writeln!(out, "  id           {}", ip.identification)?;
    writeln!(out, "  ttl          {}", ip.ttl)?;
    writeln!(out, "  protocol     {}", ip.protocol)?;
    writeln!(out, "  source       {}", ip.source_addr())?;
    writeln!(out, "  destination  {}", ip.destination_addr())?;

    let options = ip
        .header_len()
        .checked_sub(decoder.length_of::<Ipv4Header>())
        .context("IPv4 header length shorter than the fixed header")?;
    if options > 0 {
        tracing::debug!(options, "Skipping IPv4 options");
        decoder.skip(options).context("Truncated IPv4 options")?;
    }

    if ip.protocol != IPPROTO_TCP {
        tracing::debug!(protocol = ip.protocol, "Not TCP, stopping");
        return write_payload(&decoder, payload_limit, out);
    }

    let tcp: TcpHeader = decoder.decode().context("Truncated TCP header")?;
    writeln!(out, "TCP")?;
    writeln!(out, "  source port  {}", tcp.source_port)?;
    writeln!(out, "  dest port    {}", tcp.destination_port)?;
    writeln!(out, "  seq          {}", tcp.sequence_number)?;
    writeln!(out, "  ack          {}", tcp.acknowledgment_number)?;
    writeln!(out, "  flags        0x{:02X}", tcp.flags)?;
    writeln!(out, "  window       {}", tcp.window_size)?;

    let options = tcp
        .header_len()
        .checked_sub(decoder.length_of::<TcpHeader>())
        .context("TCP data offset shorter than the fixed header")?;
    if options > 0 {
        tracing::debug!(options, "Skipping TCP options");
        decoder.skip(options).context("Truncated TCP options")?;
    }

    write_payload(&decoder, payload_limit, out)
}

fn write_payload(decoder: &Decoder<&[u8]>, limit: usize, out: &mut impl Write) -> Result<()> {
    let payload = decoder.unread_up_to(limit);
    writeln!(out, "Payload ({} bytes)", decoder.remaining_len())?;
    if !payload.is_empty() {
        writeln!(out, "  hex          {}", hex::encode(payload))?;
        writeln!(out, "  text         {}", String::from_utf8_lossy(payload))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ethernet + IPv4 with one 4-byte option + TCP + "TEST".
    const FRAME: &str = "
        00:11:22:33:44:55 00:1a:2b:3c:4d:5e 08 00
        46 00 00 30 1a 2b 40 00 40 06 00 00 c0 a8 01 64 c0 a8 01 01 01 01 82 00
        30 39 00 50 12 34 56 78 9a bc de f0 50 02 72 10 00 00 00 00
        54 45 53 54
    ";

    fn run(frame: &[u8], endian: Endian, limit: usize) -> Result<String> {
        let mut out = Vec::new();
        dump(frame, endian, limit, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_parse_hex_ignores_separators() {
        assert_eq!(parse_hex("de:ad be\nef").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(parse_hex(FRAME).unwrap().len(), 62);
        assert!(parse_hex(" \n: ").is_err());
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn test_endian_flag() {
        let cli = Cli::try_parse_from(["frame-dump", "--endian", "little", "00"]).unwrap();
        assert_eq!(cli.endian, Endian::Little);
        let cli = Cli::try_parse_from(["frame-dump", "00"]).unwrap();
        assert_eq!(cli.endian, Endian::Big);
        assert!(Cli::try_parse_from(["frame-dump", "--endian", "middle", "00"]).is_err());
    }

    #[test]
    fn test_dump_skips_options_and_prints_payload() {
        let frame = parse_hex(FRAME).unwrap();
        let text = run(&frame, Endian::Big, 64).unwrap();
        assert!(text.contains("source       00:1A:2B:3C:4D:5E"));
        assert!(text.contains("header len   24"));
        assert!(text.contains("source       192.168.1.100"));
        assert!(text.contains("dest port    80"));
        assert!(text.contains("Payload (4 bytes)"));
        assert!(text.contains("hex          54455354"));
        assert!(text.contains("text         TEST"));
    }

    #[test]
    fn test_dump_limits_payload() {
        let frame = parse_hex(FRAME).unwrap();
        let text = run(&frame, Endian::Big, 2).unwrap();
        assert!(text.contains("Payload (4 bytes)"));
        assert!(text.contains("text         TE\n"));
    }

    #[test]
    fn test_dump_stops_after_non_ipv4() {
        let mut frame = parse_hex(FRAME).unwrap();
        frame[12..14].copy_from_slice(&[0x86, 0xDD]);
        let text = run(&frame, Endian::Big, 64).unwrap();
        assert!(text.contains("ethertype    0x86DD"));
        assert!(!text.contains("IPv4"));
        assert!(text.contains("Payload (48 bytes)"));
    }

    #[test]
    fn test_dump_stops_after_non_tcp() {
        let mut frame = parse_hex(FRAME).unwrap();
        frame[23] = 17;
        let text = run(&frame, Endian::Big, 64).unwrap();
        assert!(text.contains("protocol     17"));
        assert!(!text.contains("TCP"));
        assert!(text.contains("Payload (24 bytes)"));
    }

    #[test]
    fn test_dump_rejects_short_ihl() {
        let mut frame = parse_hex(FRAME).unwrap();
        frame[14] = 0x44;
        let err = run(&frame, Endian::Big, 64).unwrap_err();
        assert_eq!(err.to_string(), "IPv4 header length shorter than the fixed header");
    }

    #[test]
    fn test_dump_reports_truncated_header() {
        let frame = parse_hex(FRAME).unwrap();
        let err = run(&frame[..16], Endian::Big, 64).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "Truncated IPv4 header: insufficient data: required bytes: 20, available bytes: 2"
        );
    }
}
