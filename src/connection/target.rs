//! The target interface, the adapter over the legacy tables, and the
//! explicit choice between them.

use crate::config::PacingConfig;
use crate::connection::error::ConnectError;
use crate::connection::pacer::Pacer;
use crate::connection::record::ConnectionRecord;
use crate::core::{ComponentKind, ConnectionPhase, ConnectionState, PhaseHistory};
use crate::legacy;
use chrono::Utc;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// Interface clients expect: a scripted handshake and nothing more.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetInterface {
    pacing: PacingConfig,
}

impl TargetInterface {
    pub fn new(pacing: PacingConfig) -> Self {
        Self { pacing }
    }

    pub fn pacing(&self) -> &PacingConfig {
        &self.pacing
    }

    /// Print the three handshake lines, pausing after the first two.
    pub fn connect<W, P>(&self, out: &mut W, pacer: &mut P) -> Result<(), ConnectError>
    where
        W: Write + ?Sized,
        P: Pacer + ?Sized,
    {
        writeln!(out, "Initializing neural interface...")?;
        pacer.pause(self.pacing.warmup);
        writeln!(out, "Calibrating synaptic handshake...")?;
        pacer.pause(self.pacing.calibration);
        writeln!(out, "Neural interface ready.")?;
        Ok(())
    }
}

/// Target interface whose connection is filled in from the legacy tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adapter {
    kind: ComponentKind,
    target: TargetInterface,
}

impl Adapter {
    /// Adapter for `kind` with real-time pacing.
    pub fn new(kind: ComponentKind) -> Self {
        Self::with_pacing(kind, PacingConfig::default())
    }

    pub fn with_pacing(kind: ComponentKind, pacing: PacingConfig) -> Self {
        Self {
            kind,
            target: TargetInterface::new(pacing),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Run the handshake, then link to the component and report its rates.
    ///
    /// Rates and header are always looked up as [`ConnectionState::Enabled`];
    /// the scripted connection never observes a real state.
    pub fn connect<W, P>(
        &self,
        out: &mut W,
        pacer: &mut P,
    ) -> Result<ConnectionRecord, ConnectError>
    where
        W: Write + ?Sized,
        P: Pacer + ?Sized,
    {
        let kind = self.kind;
        let pacing = self.target.pacing();
        let started_at = Utc::now();
        info!(%kind, "adapter connect started");

        let phases = PhaseHistory::new().advance(ConnectionPhase::Handshake);
        self.target.connect(out, pacer)?;

        let transfer_rate = legacy::transfer_rate(kind);
        let average_packets = legacy::average_packets(kind, ConnectionState::Enabled);
        let message_header = legacy::message_header(kind, ConnectionState::Enabled).to_string();
        debug!(%kind, transfer_rate, average_packets, %message_header, "legacy readings");

        let phases = phases.advance(ConnectionPhase::Linking);
        writeln!(out, "Connecting to {} ({})...", kind, legacy::patch_label(kind))?;
        pacer.pause(pacing.link);
        writeln!(out, "Transfer rate: {transfer_rate} Mb/s")?;

        let phases = phases.advance(ConnectionPhase::Receiving);
        writeln!(out, "Receiving packets from {kind}...")?;
        pacer.pause(pacing.receive);
        writeln!(out, "Average packets: {average_packets} per second")?;

        let finished_at = Utc::now();
        let duration = finished_at
            .signed_duration_since(started_at)
            .to_std()
            .unwrap_or(Duration::ZERO);
        let phases = phases.advance(ConnectionPhase::Terminated);
        writeln!(
            out,
            "Connection lasted {:.2} seconds. Neural link terminated.",
            duration.as_secs_f64()
        )?;
        info!(%kind, elapsed_ms = duration.as_millis() as u64, "adapter connect finished");

        Ok(ConnectionRecord {
            id: Uuid::new_v4(),
            kind,
            transfer_rate,
            average_packets,
            message_header,
            started_at,
            finished_at,
            duration,
            phases,
        })
    }
}

/// Which interface a client talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connector {
    /// Handshake only
    Plain(TargetInterface),
    /// Handshake plus legacy readings
    Adapted(Adapter),
}

impl Connector {
    /// Connect through the selected interface.
    ///
    /// Only the adapted variant produces a record.
    pub fn connect<W, P>(
        &self,
        out: &mut W,
        pacer: &mut P,
    ) -> Result<Option<ConnectionRecord>, ConnectError>
    where
        W: Write + ?Sized,
        P: Pacer + ?Sized,
    {
        match self {
            Self::Plain(target) => {
                target.connect(out, pacer)?;
                Ok(None)
            }
            Self::Adapted(adapter) => adapter.connect(out, pacer).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::pacer::RecordingPacer;

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8(buf.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn target_prints_handshake_with_two_pauses() {
        let target = TargetInterface::default();
        let mut out = Vec::new();
        let mut pacer = RecordingPacer::new();

        target.connect(&mut out, &mut pacer).unwrap();

        assert_eq!(
            lines(&out),
            vec![
                "Initializing neural interface...",
                "Calibrating synaptic handshake...",
                "Neural interface ready.",
            ]
        );
        assert_eq!(
            pacer.pauses(),
            &[Duration::from_secs(5), Duration::from_secs(7)]
        );
    }

    #[test]
    fn adapter_pauses_in_script_order() {
        let adapter = Adapter::new(ComponentKind::Frontal);
        let mut out = Vec::<u8>::new();
        let mut pacer = RecordingPacer::new();

        adapter.connect(&mut out, &mut pacer).unwrap();

        assert_eq!(
            pacer.pauses(),
            &[
                Duration::from_secs(5),
                Duration::from_secs(7),
                Duration::from_secs(3),
                Duration::from_secs(6),
            ]
        );
    }

    #[test]
    fn adapter_record_uses_enabled_readings() {
        let adapter = Adapter::with_pacing(ComponentKind::Temporal, PacingConfig::instant());
        let record = adapter
            .connect(&mut Vec::<u8>::new(), &mut RecordingPacer::new())
            .unwrap();

        assert_eq!(record.kind, ComponentKind::Temporal);
        assert_eq!(record.transfer_rate, 999.878);
        assert_eq!(record.average_packets, 726.91);
        assert_eq!(
            record.message_header,
            "Temporal link established: auditory memory channel open"
        );
        assert!(record.finished_at >= record.started_at);
    }

    #[test]
    fn adapter_walks_every_phase() {
        let adapter = Adapter::with_pacing(ComponentKind::CerebralCortex, PacingConfig::instant());
        let record = adapter
            .connect(&mut Vec::<u8>::new(), &mut RecordingPacer::new())
            .unwrap();

        assert_eq!(
            record.phases.path(),
            vec![
                &ConnectionPhase::Idle,
                &ConnectionPhase::Handshake,
                &ConnectionPhase::Linking,
                &ConnectionPhase::Receiving,
                &ConnectionPhase::Terminated,
            ]
        );
    }

    #[test]
    fn plain_connector_yields_no_record() {
        let connector = Connector::Plain(TargetInterface::new(PacingConfig::instant()));
        let mut out = Vec::new();

        let record = connector
            .connect(&mut out, &mut RecordingPacer::new())
            .unwrap();

        assert!(record.is_none());
        assert_eq!(lines(&out).len(), 3);
    }

    #[test]
    fn adapted_connector_yields_record() {
        let adapter = Adapter::with_pacing(ComponentKind::Frontal, PacingConfig::instant());
        let record = Connector::Adapted(adapter)
            .connect(&mut Vec::<u8>::new(), &mut RecordingPacer::new())
            .unwrap();

        assert_eq!(record.map(|r| r.kind), Some(ComponentKind::Frontal));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_surfaces_as_output_error() {
        let adapter = Adapter::with_pacing(ComponentKind::Frontal, PacingConfig::instant());
        let result = adapter.connect(&mut BrokenPipe, &mut RecordingPacer::new());

        assert!(matches!(result, Err(ConnectError::Output(_))));
    }
}
