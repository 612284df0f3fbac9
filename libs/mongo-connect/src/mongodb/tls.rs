use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rustls::RootCertStore;
use rustls_pki_types::CertificateDer;
use rustls_pki_types::pem::PemObject;
use std::io::Write;
use tempfile::TempPath;
use tracing::debug;

use super::{MongoError, MongoResult};

const PEM_LINE_WIDTH: usize = 64;

/// Root certificates resolved from a caller-supplied CA bundle
///
/// Only certificates that load as trust anchors are kept. Expiry, key usage
/// and the rest of the chain are checked later, during the TLS handshake.
///
/// # Example
/// ```ignore
/// use mongo_connect::mongodb::TrustStore;
///
/// let store = TrustStore::from_base64(&ca_base64)?;
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TrustStore {
    roots: RootCertStore,
    certificates: Vec<CertificateDer<'static>>,
}

impl TrustStore {
    /// Decode a base64-wrapped PEM bundle into a trust store
    ///
    /// Line breaks inside the base64 text are ignored.
    pub fn from_base64(encoded: &str) -> MongoResult<Self> {
        let compact: String = encoded
            .chars()
            .filter(|c| !matches!(c, '\r' | '\n'))
            .collect();
        let pem = STANDARD.decode(compact)?;
        Self::from_pem(&pem)
    }

    /// Load every usable `CERTIFICATE` block from PEM text
    ///
    /// Blocks of other kinds and certificates that fail to parse are skipped.
    /// Fails with [`MongoError::CaCertificate`] when nothing was loaded.
    pub fn from_pem(pem: &[u8]) -> MongoResult<Self> {
        let mut roots = RootCertStore::empty();
        let mut certificates = Vec::new();

        // Malformed blocks are skipped like unusable certificates.
        for cert in CertificateDer::pem_slice_iter(pem).flatten() {
            match roots.add(cert.clone()) {
                Ok(()) => certificates.push(cert),
                Err(e) => debug!("Skipping unusable CA certificate: {}", e),
            }
        }

        if certificates.is_empty() {
            return Err(MongoError::CaCertificate);
        }

        debug!("Loaded {} CA certificate(s)", certificates.len());
        Ok(Self {
            roots,
            certificates,
        })
    }

    /// Number of trusted roots
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The rustls root store built from the bundle
    pub fn roots(&self) -> &RootCertStore {
        &self.roots
    }

    /// DER encodings of the accepted certificates, in bundle order
    pub fn certificates(&self) -> &[CertificateDer<'static>] {
        &self.certificates
    }

    /// Re-encode the accepted certificates as a PEM bundle
    pub fn to_pem(&self) -> String {
        let mut out = String::new();
        for cert in &self.certificates {
            let body = STANDARD.encode(cert.as_ref());
            out.push_str("-----BEGIN CERTIFICATE-----\n");
            for line in body.as_bytes().chunks(PEM_LINE_WIDTH) {
                out.push_str(&String::from_utf8_lossy(line));
                out.push('\n');
            }
            out.push_str("-----END CERTIFICATE-----\n");
        }
        out
    }

    /// Write the bundle to a temporary file for the driver's `ca_file_path`
    ///
    /// The file is removed when the returned path is dropped.
    pub(crate) fn stage(&self) -> MongoResult<TempPath> {
        let mut file = tempfile::Builder::new()
            .prefix("mongo-ca-")
            .suffix(".pem")
            .tempfile()?;
        file.write_all(self.to_pem().as_bytes())?;
        file.flush()?;

        let path = file.into_temp_path();
        debug!("Staged CA bundle at {}", path.display());
        Ok(path)
    }
}
