/*! Flat encoding

Nested text (cluster → document → sentence) is stored as a single string by joining
sentences with [SENT_SEP] and documents with [DOC_SEP]:

```text
sent 1<sent/>sent 2<doc/>sent 1<sent/>sent 2<sent/>sent 3
```

Summaries have no document level and only use [SENT_SEP].

Decoding is the exact inverse as long as sentences are non-empty and contain neither delimiter.
The encoding functions check that and refuse to produce an ambiguous string.

The empty string is the only ambiguous encoding: a cluster without documents and a cluster
made of a single empty document both encode to `""`. It is decoded as a cluster without documents.
!*/
mod decode;
mod encode;

pub use decode::{decode_cluster, decode_summary};
pub use encode::{encode_cluster, encode_summary, validate_sentence};

/// Separates sentences inside a document or a summary.
pub const SENT_SEP: &str = "<sent/>";

/// Separates documents inside a cluster.
pub const DOC_SEP: &str = "<doc/>";
