//! Serde integration: the queue serializes as a plain sequence.

use core::cmp;
use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, Error, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::strategy::AllocStrategy;
use crate::CircQueue;

impl<T: Serialize, S: AllocStrategy> Serialize for CircQueue<T, S> {
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

/// Deserializes into an unbounded queue; apply a ceiling afterwards by
/// collecting into a bounded one if needed.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for CircQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeqVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for SeqVisitor<T> {
            type Value = CircQueue<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a sequence")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut queue = CircQueue::new();
                // size hints are untrusted; cap the speculative reservation
                let hint = cmp::min(seq.size_hint().unwrap_or(0), 4096);
                if queue.reserve(hint).is_err() {
                    return Err(A::Error::custom("capacity exceeded"));
                }
                while let Some(element) = seq.next_element()? {
                    if queue.push_back(element).is_err() {
                        return Err(A::Error::custom("capacity exceeded"));
                    }
                }
                Ok(queue)
            }
        }

        deserializer.deserialize_seq(SeqVisitor(PhantomData))
    }
}
