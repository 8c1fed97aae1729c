// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Pi-hole Database Schema
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

table! {
    queries (id) {
        id -> Integer,
        source -> Text,
        query_type -> Text,
        name -> Text,
        ts -> Text,
    }
}

table! {
    forwards (id) {
        id -> Integer,
        resolver -> Text,
        name -> Text,
        ts -> Text,
    }
}

table! {
    replies (id) {
        id -> Integer,
        ip -> Text,
        reply_type -> Text,
        name -> Text,
        ts -> Text,
    }
}

table! {
    summaries (id) {
        id -> Integer,
        ts -> Text,
        domains_being_blocked -> BigInt,
        dns_queries_today -> BigInt,
        ads_blocked_today -> BigInt,
        ads_percentage_today -> Double,
    }
}

allow_tables_to_appear_in_same_query!(queries, forwards, replies, summaries,);
