// SPDX-License-Identifier: AGPL-3.0-only

//! Resource record classes and types.
//!
//! Both are looked up by mnemonic while a record's positional fields are scanned. The numeric
//! codes are carried along for hosts that need them but play no part in scanning.

/// Error returned when parsing a class or type mnemonic that is not in the table.
#[derive(Debug, Fail, PartialEq)]
#[fail(display = "unknown record {} '{}'", kind, mnemonic)]
pub struct UnknownMnemonic {
    /// Either `"class"` or `"type"`.
    pub kind: &'static str,
    /// The text that failed to parse.
    pub mnemonic: String,
}

mnemonic_table! {
    /// A resource record class ([RFC 1035 § 3.2.4](https://tools.ietf.org/html/rfc1035#section-3.2.4)).
    pub enum RecordClass ("class") {
        /// The Internet.
        IN = 1, "IN";
        /// CSNET, obsolete.
        CS = 2, "CS";
        /// Chaos.
        CH = 3, "CH";
        /// Hesiod.
        HS = 4, "HS";
        /// Any class, spelled `*`.
        ANY = 255, "*";
    }
}

mnemonic_table! {
    /// A resource record type.
    pub enum RecordType ("type") {
        A = 1, "A";
        NS = 2, "NS";
        MD = 3, "MD";
        MF = 4, "MF";
        CNAME = 5, "CNAME";
        SOA = 6, "SOA";
        MB = 7, "MB";
        MG = 8, "MG";
        MR = 9, "MR";
        NULL = 10, "NULL";
        WKS = 11, "WKS";
        PTR = 12, "PTR";
        HINFO = 13, "HINFO";
        MINFO = 14, "MINFO";
        MX = 15, "MX";
        TXT = 16, "TXT";
        RP = 17, "RP";
        AFSDB = 18, "AFSDB";
        X25 = 19, "X25";
        ISDN = 20, "ISDN";
        RT = 21, "RT";
        NSAP = 22, "NSAP";
        NSAP_PTR = 23, "NSAP-PTR";
        SIG = 24, "SIG";
        KEY = 25, "KEY";
        PX = 26, "PX";
        GPOS = 27, "GPOS";
        AAAA = 28, "AAAA";
        LOC = 29, "LOC";
        NXT = 30, "NXT";
        EID = 31, "EID";
        NIMLOC = 32, "NIMLOC";
        SRV = 33, "SRV";
        ATMA = 34, "ATMA";
        NAPTR = 35, "NAPTR";
        KX = 36, "KX";
        CERT = 37, "CERT";
        A6 = 38, "A6";
        DNAME = 39, "DNAME";
        SINK = 40, "SINK";
        OPT = 41, "OPT";
        APL = 42, "APL";
        DS = 43, "DS";
        SSHFP = 44, "SSHFP";
        IPSECKEY = 45, "IPSECKEY";
        RRSIG = 46, "RRSIG";
        NSEC = 47, "NSEC";
        DNSKEY = 48, "DNSKEY";
        DHCID = 49, "DHCID";
        NSEC3 = 50, "NSEC3";
        NSEC3PARAM = 51, "NSEC3PARAM";
        TLSA = 52, "TLSA";
        SMIMEA = 53, "SMIMEA";
        HIP = 55, "HIP";
        NINFO = 56, "NINFO";
        RKEY = 57, "RKEY";
        TALINK = 58, "TALINK";
        CDS = 59, "CDS";
        CDNSKEY = 60, "CDNSKEY";
        OPENPGPKEY = 61, "OPENPGPKEY";
        CSYNC = 62, "CSYNC";
        ZONEMD = 63, "ZONEMD";
        SPF = 99, "SPF";
        UINFO = 100, "UINFO";
        UID = 101, "UID";
        GID = 102, "GID";
        UNSPEC = 103, "UNSPEC";
        NID = 104, "NID";
        L32 = 105, "L32";
        L64 = 106, "L64";
        LP = 107, "LP";
        EUI48 = 108, "EUI48";
        EUI64 = 109, "EUI64";
        TKEY = 249, "TKEY";
        TSIG = 250, "TSIG";
        IXFR = 251, "IXFR";
        AXFR = 252, "AXFR";
        MAILB = 253, "MAILB";
        MAILA = 254, "MAILA";
        /// All records, spelled `*`. Only meaningful in queries.
        ANY = 255, "*";
        URI = 256, "URI";
        CAA = 257, "CAA";
        AVC = 258, "AVC";
        DOA = 259, "DOA";
        AMTRELAY = 260, "AMTRELAY";
        TA = 32768, "TA";
        DLV = 32769, "DLV";
    }
}
