//! Frame reassembly for the co-processor link.
//!
//! Frames are text spans bounded by literal markers:
//!
//! ```text
//! <PKT_START> ... <PKT_END>
//! ```
//!
//! The reassembler consumes the UART stream one byte at a time, resyncs
//! on the START marker, and emits each complete frame with both markers
//! included. It runs in the receive hot path, so it never allocates and
//! does constant work per byte.

use heapless::Vec;

/// Literal marker opening every frame.
pub const PKT_START: &[u8] = b"<PKT_START>";

/// Literal marker closing every frame.
pub const PKT_END: &[u8] = b"<PKT_END>";

/// `PKT_START` as text, for packet-level checks.
pub const PKT_START_STR: &str = "<PKT_START>";

/// `PKT_END` as text.
pub const PKT_END_STR: &str = "<PKT_END>";

/// Field separator inside the packet body.
pub const FIELD_DELIMITER: char = '|';

/// Maximum length of an emitted frame.
pub const MAX_FRAME_LEN: usize = 1024;

/// Accumulation buffer capacity.
const ACCUM_LEN: usize = 2048;

/// Bytes of markerless input tolerated before the buffer is cleared as
/// line noise.
const NOISE_DISCARD_LEN: usize = 100;

/// A complete frame, START and END markers included.
pub type RawFrame = Vec<u8, MAX_FRAME_LEN>;

/// Errors reported while reassembling frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Accumulation buffer filled without a terminator; it has been reset
    Overflow,
}

/// Streaming reassembler turning raw bytes into complete frames.
///
/// Two states: seeking a START marker, or inside a frame waiting for the
/// END marker. Bytes outside a frame are noise and get discarded in
/// bounded batches; a frame that outgrows the buffer is dropped without
/// disturbing reassembly of the next one.
#[derive(Debug, Clone)]
pub struct Reassembler {
    buf: Vec<u8, ACCUM_LEN>,
    in_frame: bool,
}

impl Default for Reassembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reassembler {
    /// Create a reassembler in the seeking state.
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            in_frame: false,
        }
    }

    /// Discard all buffered input and return to seeking.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.in_frame = false;
    }

    /// Feed one received byte.
    ///
    /// Returns `Ok(Some(frame))` when the byte completes a frame,
    /// `Ok(None)` when more bytes are needed, and `Err(Overflow)` when
    /// the accumulation buffer filled without a terminator. Overflow is
    /// recoverable: the buffer has been reset and feeding may continue.
    pub fn feed(&mut self, byte: u8) -> Result<Option<RawFrame>, FrameError> {
        if self.buf.push(byte).is_err() {
            self.reset();
            return Err(FrameError::Overflow);
        }

        if !self.in_frame {
            // A marker can only be completed by the byte just appended,
            // so the tail is the only place a new one can appear.
            if ends_with_marker(&self.buf, PKT_START) {
                let marker_start = self.buf.len() - PKT_START.len();
                discard_front(&mut self.buf, marker_start);
                self.in_frame = true;
            } else if self.buf.len() > NOISE_DISCARD_LEN {
                self.buf.clear();
            }
        } else if ends_with_marker(&self.buf, PKT_END) {
            // The START marker was shifted to the front on entry, so the
            // whole buffer is the frame. Oversize frames are truncated;
            // losing the END marker makes validation reject them.
            let take = self.buf.len().min(MAX_FRAME_LEN);
            let mut frame = RawFrame::new();
            let _ = frame.extend_from_slice(&self.buf[..take]);
            self.reset();
            return Ok(Some(frame));
        }

        Ok(None)
    }
}

fn ends_with_marker(buf: &[u8], marker: &[u8]) -> bool {
    buf.len() >= marker.len() && buf[buf.len() - marker.len()..] == *marker
}

/// Drop the first `count` bytes, shifting the remainder to the front.
fn discard_front(buf: &mut Vec<u8, ACCUM_LEN>, count: usize) {
    let remaining = buf.len() - count;
    buf.copy_within(count.., 0);
    buf.truncate(remaining);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed a byte stream and collect every emitted frame.
    fn feed_all(reassembler: &mut Reassembler, bytes: &[u8]) -> std::vec::Vec<RawFrame> {
        let mut frames = std::vec::Vec::new();
        for &byte in bytes {
            if let Ok(Some(frame)) = reassembler.feed(byte) {
                frames.push(frame);
            }
        }
        frames
    }

    /// Reference scanner: non-overlapping START..END spans over the whole
    /// stream at once.
    fn scan_spans(stream: &[u8]) -> std::vec::Vec<std::vec::Vec<u8>> {
        let mut spans = std::vec::Vec::new();
        let mut pos = 0;
        while let Some(start) = find(&stream[pos..], PKT_START) {
            let start = pos + start;
            let Some(end) = find(&stream[start..], PKT_END) else {
                break;
            };
            let end = start + end + PKT_END.len();
            spans.push(stream[start..end].to_vec());
            pos = end;
        }
        spans
    }

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    #[test]
    fn test_single_frame_byte_at_a_time() {
        let stream = b"<PKT_START>TYPE:TEST|DATA:hi|CHECKSUM:5<PKT_END>";
        let mut reassembler = Reassembler::new();
        let frames = feed_all(&mut reassembler, stream);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_slice(), stream.as_slice());
    }

    #[test]
    fn test_noise_before_frame_is_discarded() {
        let mut stream = b"garbage!@#".to_vec();
        stream.extend_from_slice(b"<PKT_START>TYPE:TEST|DATA:|CHECKSUM:0<PKT_END>");
        let mut reassembler = Reassembler::new();
        let frames = feed_all(&mut reassembler, &stream);
        assert_eq!(frames.len(), 1);
        assert!(frames[0].starts_with(PKT_START));
    }

    #[test]
    fn test_back_to_back_frames() {
        let stream = b"<PKT_START>A<PKT_END><PKT_START>B<PKT_END>";
        let mut reassembler = Reassembler::new();
        let frames = feed_all(&mut reassembler, stream);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].as_slice(), b"<PKT_START>A<PKT_END>".as_slice());
        assert_eq!(frames[1].as_slice(), b"<PKT_START>B<PKT_END>".as_slice());
    }

    #[test]
    fn test_long_noise_run_is_cleared() {
        // Well past the discard threshold, then a clean frame.
        let mut stream = vec![b'x'; 500];
        stream.extend_from_slice(b"<PKT_START>ok<PKT_END>");
        let mut reassembler = Reassembler::new();
        let frames = feed_all(&mut reassembler, &stream);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_slice(), b"<PKT_START>ok<PKT_END>".as_slice());
    }

    #[test]
    fn test_unterminated_frame_overflows_then_recovers() {
        let mut reassembler = Reassembler::new();
        let mut overflowed = false;
        for &byte in PKT_START.iter() {
            assert_eq!(reassembler.feed(byte), Ok(None));
        }
        // 3000 frame bytes with no terminator must trip the buffer cap.
        for _ in 0..3000 {
            if reassembler.feed(b'z') == Err(FrameError::Overflow) {
                overflowed = true;
            }
        }
        assert!(overflowed);

        // The next valid frame reassembles untouched.
        let frames = feed_all(&mut reassembler, b"<PKT_START>next<PKT_END>");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].as_slice(), b"<PKT_START>next<PKT_END>".as_slice());
    }

    #[test]
    fn test_oversize_frame_is_truncated_without_end_marker() {
        let mut stream = b"<PKT_START>".to_vec();
        stream.extend_from_slice(&vec![b'a'; 1500]);
        stream.extend_from_slice(PKT_END);
        let mut reassembler = Reassembler::new();
        let frames = feed_all(&mut reassembler, &stream);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), MAX_FRAME_LEN);
        assert!(!frames[0].ends_with(PKT_END));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Streaming one byte at a time emits exactly the spans a
            /// whole-stream scan finds.
            #[test]
            fn streaming_matches_batch_scan(
                segments in proptest::collection::vec(
                    ("[a-z0-9 ]{0,20}", "[A-Za-z0-9 .,|:]{0,60}"),
                    0..5,
                ),
            ) {
                let mut stream = std::vec::Vec::new();
                for (noise, payload) in &segments {
                    stream.extend_from_slice(noise.as_bytes());
                    stream.extend_from_slice(PKT_START);
                    stream.extend_from_slice(payload.as_bytes());
                    stream.extend_from_slice(PKT_END);
                }

                let mut reassembler = Reassembler::new();
                let streamed = feed_all(&mut reassembler, &stream);
                let batch = scan_spans(&stream);

                prop_assert_eq!(streamed.len(), batch.len());
                for (got, want) in streamed.iter().zip(batch.iter()) {
                    prop_assert_eq!(got.as_slice(), want.as_slice());
                }
            }

            /// A frame reassembles identically no matter how the stream
            /// is chunked on delivery.
            #[test]
            fn chunking_invariance(
                payload in "[A-Za-z0-9 .,|:]{0,60}",
                chunk_len in 1usize..16,
            ) {
                let mut stream = PKT_START.to_vec();
                stream.extend_from_slice(payload.as_bytes());
                stream.extend_from_slice(PKT_END);

                let mut reassembler = Reassembler::new();
                let mut frames = std::vec::Vec::new();
                for chunk in stream.chunks(chunk_len) {
                    frames.extend(feed_all(&mut reassembler, chunk));
                }

                prop_assert_eq!(frames.len(), 1);
                prop_assert_eq!(frames[0].as_slice(), stream.as_slice());
            }
        }
    }
}
