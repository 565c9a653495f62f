mod test_pairs_form_in_arrival_order;
