use std::{io::Write, sync::Mutex};
use tripsplit_application::{
    NotificationError, NotificationPort, NotificationResponse, PaymentRequest,
};

/// Queues payment requests as JSON lines for the mail worker to pick up.
///
/// A request counts as delivered once its line is flushed.
pub struct OutboxNotifier<W> {
    sink: Mutex<W>,
}

impl<W: Write + Send> OutboxNotifier<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> NotificationPort for OutboxNotifier<W> {
    fn request_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<NotificationResponse, NotificationError> {
        let line = serde_json::to_string(request)
            .map_err(|err| NotificationError::Transport(err.to_string()))?;

        let mut sink = self
            .sink
            .lock()
            .map_err(|_| NotificationError::Transport("outbox lock poisoned".to_owned()))?;
        writeln!(sink, "{line}")
            .and_then(|()| sink.flush())
            .map_err(|err| NotificationError::Transport(err.to_string()))?;

        tracing::debug!(debtor = %request.debtor_name, "queued payment request");
        Ok(NotificationResponse::delivered())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io;
    use tripsplit_application::{SuggestedSettlement, TripContext};
    use tripsplit_domain::Money;

    fn request(debtor: &str) -> PaymentRequest {
        PaymentRequest::new(
            &TripContext::new(Some("t-9".to_owned()), "Dolomites", "chf"),
            &SuggestedSettlement {
                debtor: debtor.to_owned(),
                creditor: "Alice".to_owned(),
                amount: Money::new(1250, 2),
            },
        )
    }

    #[rstest]
    fn writes_one_json_line_per_request() {
        let outbox = OutboxNotifier::new(Vec::new());

        outbox.request_payment(&request("Bob")).expect("queued");
        outbox.request_payment(&request("Cleo")).expect("queued");

        let written = String::from_utf8(outbox.into_inner()).expect("utf-8");
        let lines: Vec<serde_json::Value> = written
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["debtorName"], "Bob");
        assert_eq!(lines[1]["debtorName"], "Cleo");
        assert_eq!(lines[0]["currency"], "chf");
        assert_eq!(lines[0]["amount"], 12.5);
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "disk gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[rstest]
    fn write_failure_is_a_transport_error() {
        let outbox = OutboxNotifier::new(BrokenSink);

        let err = outbox
            .request_payment(&request("Bob"))
            .expect_err("write must fail");

        assert!(
            matches!(err, NotificationError::Transport(reason) if reason.contains("disk gone"))
        );
    }
}
